//! Console presentation for Voltaic
//!
//! Uniform output for the simulator: diagnostics (`E: ` / `W: ` messages),
//! analysis directives, symbolic results, numeric tables and the scoped
//! numeric print options used while solver output is written.

pub mod display;

// Re-export commonly used types
pub use display::{
    format_analysis, format_g, format_real, open_utf8, print_analysis, print_general_error,
    print_info_line, print_parse_error, print_result_check, print_symbolic_equations,
    print_symbolic_results, print_symbolic_transfer_functions, print_warning, printoptions, table,
    table_print, warn_if_locale_unset, Analysis, Num, NumMatrix, NumVec, PrintOptions,
    TransferFunction,
};
