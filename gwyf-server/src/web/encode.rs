//! JSON encoding of the response payload.

use crate::domain::ScheduleResult;

/// Serialize `result`, indented with two spaces when `pretty` is set.
pub fn encode_result(result: &ScheduleResult, pretty: bool) -> Result<Vec<u8>, serde_json::Error> {
    if pretty {
        serde_json::to_vec_pretty(result)
    } else {
        serde_json::to_vec(result)
    }
}
