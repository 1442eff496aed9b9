//! Exit codes for dojoctl

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the configuration cannot be read or parsed (EX_CONFIG)
pub const EXIT_CONFIG_ERROR: i32 = 78;

/// Map an error from a command to an exit code
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<dojo_common::DojoError>().is_some() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_GENERAL_ERROR
    }
}
