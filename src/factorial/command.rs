pub mod compute_factorial_cmd;
