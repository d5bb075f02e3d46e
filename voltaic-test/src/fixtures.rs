//! Test data generation utilities
//!
//! Descriptor and result files in the formats the `voltaic` binary reads.

/// One descriptor of every analysis type, as a TOML document
pub fn analyses_toml() -> &'static str {
    r#"
[[analysis]]
type = "op"
guess = true
outfile = "op.out"

[[analysis]]
type = "dc"
source = "V1"
start = 0.0
stop = 5.0
step = 0.1
sweep_type = "linear"

[[analysis]]
type = "tran"
tstep = 1e-9
tstop = 1e-6
tstart = 0.0
method = "trap"

[[analysis]]
type = "shooting"
period = 1e-3
method = "brute-force"
points = 100
autonomous = false

[[analysis]]
type = "ac"
start = 1.0
stop = 1e6
nsteps = 100
sweep_type = "log"
"#
}

/// The same descriptors as [`analyses_toml`] in JSON form
pub fn analyses_json() -> String {
    serde_json::json!({
        "analysis": [
            { "type": "op", "guess": true, "outfile": "op.out" },
            { "type": "dc", "source": "V1", "start": 0.0, "stop": 5.0, "step": 0.1,
              "sweep_type": "linear" },
            { "type": "tran", "tstep": 1e-9, "tstop": 1e-6, "tstart": 0.0, "method": "trap" },
            { "type": "shooting", "period": 1e-3, "method": "brute-force", "points": 100,
              "autonomous": false },
            { "type": "ac", "start": 1.0, "stop": 1e6, "nsteps": 100, "sweep_type": "log" }
        ]
    })
    .to_string()
}

/// Symbolic node voltages, deliberately out of order
pub fn symbolic_results_json() -> String {
    serde_json::json!({
        "V3": "R2*V1/(R1 + R2)",
        "I(V1)": "-V1/(R1 + R2)",
        "V1": "V1",
    })
    .to_string()
}

/// A single-pole low-pass transfer function
pub fn transfer_functions_json() -> String {
    serde_json::json!({
        "VOUT/VIN": {
            "gain": "1/(C1*R1*s + 1)",
            "gain0": "1",
            "poles": ["-1/(C1*R1)"],
            "zeros": []
        }
    })
    .to_string()
}

/// Whitespace separated columns with a header row
pub fn whitespace_table() -> &'static str {
    "time v(out) i(v1)\n0 0 0\n1e-6 0.632 -3.68e-4\n2e-6 0.865 -1.35e-4\n"
}
