/// Platform empty input source fed to the compiler
#[cfg(windows)]
pub const NULL_DEVICE: &str = "NUL";

/// Platform empty input source fed to the compiler
#[cfg(not(windows))]
pub const NULL_DEVICE: &str = "/dev/null";

/// Separator used by `CPATH`-like variables
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';

/// Separator used by `CPATH`-like variables
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';
