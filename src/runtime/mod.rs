// ============================================================================
// Runtime Module
// Reference semantics of the checks that generated code performs
// ============================================================================
//
// Generated SDKs run the rendered assertions against live values. This
// module evaluates the same descriptors directly so that the behavior of an
// emission can be tested without a target-language runtime:
// - Assertions run in emission order
// - The first failure is reported (fail-fast)
// - Absent optional values skip validation

mod checker;
mod errors;

pub use checker::{check, check_emission, check_optional, CheckError};
pub use errors::{ConstraintViolation, RuntimeResult};
