use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::core::command::{Command, CommandError};
use crate::factorial::factorial;

#[derive(Debug, Default)]
pub struct ComputeFactorialCommand {}

impl ComputeFactorialCommand {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Deserialize)]
pub struct ComputeFactorialCommandRequest {
    pub n: i64,
}

impl ComputeFactorialCommandRequest {
    pub fn new(n: i64) -> Self {
        Self { n }
    }
}

// u128 is carried as a decimal string since JSON numbers lose precision past 2^53
#[derive(Debug, Serialize)]
pub struct ComputeFactorialCommandResponse {
    pub n: i64,
    #[serde(serialize_with = "serialize_decimal")]
    pub value: u128,
}

fn serialize_decimal<S: serde::Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl Command<ComputeFactorialCommandRequest, ComputeFactorialCommandResponse> for ComputeFactorialCommand {
    fn execute(&self, req: ComputeFactorialCommandRequest) -> Result<ComputeFactorialCommandResponse, CommandError> {
        let value = factorial(req.n)?;
        debug!(n = req.n, "computed factorial");
        Ok(ComputeFactorialCommandResponse { n: req.n, value })
    }
}
