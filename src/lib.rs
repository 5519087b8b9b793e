mod options;
mod result;
mod config;
mod invocation;
mod notify;
mod parser;
mod utils;

use log::*;

pub use options::*;
pub use result::*;
pub use config::*;
pub use invocation::*;
pub use notify::*;
pub use parser::*;
pub use utils::*;

/// Detect the compiler's system include search path and store it in `config`
///
/// A compiler that cannot be started or exits with failure is reported to
/// `notifier` and leaves `config` as it was, returning `Ok(None)`. A
/// successful run whose output has no search list block is an error.
pub fn extract_include_paths(
    options: &Options,
    config: &mut SearchPathConfig,
    mut notifier: impl Notifier,
) -> Result<Option<IncludePathList>> {
    let invocation = CompilerInvocation::new(options);

    let text = match invocation.run() {
        Outcome::Exited(text) => text,
        Outcome::Failed(failure) => {
            notifier.notify(&failure.to_string());
            return Ok(None);
        },
    };

    let paths = parse_search_paths(&text)?;

    info!("Detected {} system include paths using `{}`", paths.len(), invocation.program());

    config.set_include_paths(paths.clone());

    Ok(Some(paths))
}
