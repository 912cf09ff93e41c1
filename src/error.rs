/// Parameter validation errors. All of these are local-recoverable: they are
/// shown in the UI or logged, never propagated to a crash.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("wheel radius is too close to zero for the gear ratio")]
    ZeroWheelRadius,

    #[error("could not parse {field}: expected {expected} numeric value(s)")]
    MalformedInput {
        field: &'static str,
        expected: usize,
    },
}
