//! Shared helpers for kotskel integration tests.
#![allow(dead_code, unused_imports, unused_macros)]

pub use kotskel_core::Kotskel;
use pretty_assertions::assert_eq;

/// Strip the common leading indentation and surrounding blank lines from a snippet.
pub fn dedent(text: &str) -> String {
	let lines: Vec<&str> = text.lines().collect();
	let start = lines
		.iter()
		.position(|line| !line.trim().is_empty())
		.unwrap_or(lines.len());
	let end = lines
		.iter()
		.rposition(|line| !line.trim().is_empty())
		.map_or(start, |idx| idx + 1);
	let body = &lines[start..end];

	let indent = body
		.iter()
		.filter(|line| !line.trim().is_empty())
		.map(|line| line.len() - line.trim_start().len())
		.min()
		.unwrap_or(0);

	body.iter()
		.map(|line| line.get(indent..).unwrap_or("").trim_end())
		.collect::<Vec<_>>()
		.join("\n")
}

/// Outline `input` with a custom configuration and compare it against `expected`.
pub fn rt_custom(kotskel: &Kotskel, input: &str, expected: &str) {
	let source = dedent(input);
	let rendered = kotskel
		.render_source(&source)
		.unwrap_or_else(|err| panic!("failed to outline:\n{source}\n{err}"));
	assert_eq!(dedent(&rendered), dedent(expected));
}

/// Outline `input` with the default configuration and compare it against `expected`.
pub fn rt(input: &str, expected: &str) {
	rt_custom(&Kotskel::default(), input, expected);
}

/// Check that `input` outlines to the same text twice in a row.
pub fn stable(input: &str) {
	let kotskel = Kotskel::default();
	let source = dedent(input);
	let first = kotskel.render_source(&source).unwrap();
	let second = kotskel.render_source(&source).unwrap();
	assert_eq!(first, second);
}

/// Check that `input` is rejected as a syntax error.
pub fn rejects(input: &str) {
	let source = dedent(input);
	let result = Kotskel::default().render_source(&source);
	assert!(result.is_err(), "expected a syntax error, got {result:?}");
}

macro_rules! gen_case {
	(rt { $name:ident: { input: $input:expr, output: $output:expr $(,)? } }) => {
		#[test]
		fn $name() {
			$crate::utils::rt($input, $output);
		}
	};
	(rt_custom { $name:ident: { kotskel: $kotskel:expr, input: $input:expr, output: $output:expr $(,)? } }) => {
		#[test]
		fn $name() {
			$crate::utils::rt_custom(&$kotskel, $input, $output);
		}
	};
	(stable { $name:ident: $input:expr }) => {
		#[test]
		fn $name() {
			$crate::utils::stable($input);
		}
	};
	(rejects { $name:ident: $input:expr }) => {
		#[test]
		fn $name() {
			$crate::utils::rejects($input);
		}
	};
}

/// Generate a module of outline tests from `rt`, `rt_custom`, `stable`, and `rejects` cases.
macro_rules! gen_tests {
	($prefix:ident, { $($kind:ident { $($body:tt)* })* }) => {
		mod $prefix {
			use super::*;
			$( $crate::utils::gen_case!($kind { $($body)* }); )*
		}
	};
}

pub(crate) use gen_case;
pub(crate) use gen_tests;
