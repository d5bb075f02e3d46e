//! Display and formatting utilities

pub mod analysis;
pub mod check;
pub mod diagnostics;
pub mod files;
pub mod format;
pub mod numeric;
pub mod symbolic;
pub mod table;

// Re-export commonly used types
pub use analysis::{format_analysis, print_analysis, write_analysis, Analysis};
pub use check::{print_result_check, write_result_check, DEFAULT_CHECK_VERBOSITY};
pub use diagnostics::{
    print_general_error, print_info_line, print_parse_error, print_warning, warn_if_locale_unset,
    write_general_error, write_info_line, write_parse_error, write_warning, Stream,
};
pub use files::open_utf8;
pub use format::{format_g, format_real};
pub use numeric::{
    get_printoptions, printoptions, set_printoptions, Num, NumMatrix, NumVec, PrintOptions,
    PrintOptionsGuard,
};
pub use symbolic::{
    print_symbolic_equations, print_symbolic_results, print_symbolic_transfer_functions,
    write_symbolic_equations, write_symbolic_results, write_symbolic_transfer_functions,
    TransferFunction,
};
pub use table::{render_table, table, table_print, TableOptions};
