use std::sync::OnceLock;
use regex::Regex;
use log::*;
use crate::{Error, Result, IncludePathList};

pub const START_MARKER: &str = "#include <...> search starts here:";
pub const END_MARKER: &str = "End of search list.";

fn block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?ms)^#include <\.\.\.> search starts here:[ \t]*\r?\n(.*?)^End of search list\.")
            .expect("valid search block regex")
    })
}

fn indent_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^[ \t]+").expect("valid indent regex"))
}

/// Text strictly between the start and end marker lines
pub fn search_path_block(text: &str) -> Option<&str> {
    block_regex().captures(text)
        .and_then(|caps| caps.get(1))
        .map(|block| block.as_str())
}

/// Extract the `#include <...>` search list from compiler output
pub fn parse_search_paths(text: &str) -> Result<IncludePathList> {
    let block = search_path_block(text).ok_or_else(|| {
        Error::Parse(format!("missing `{}` ... `{}` block", START_MARKER, END_MARKER))
    })?;

    let block = indent_regex().replace_all(block, "");

    // blank lines carry no directory
    let paths: IncludePathList = block.lines()
        .filter(|line| !line.is_empty())
        .collect();

    debug!("Parsed {} search paths", paths.len());

    Ok(paths)
}
