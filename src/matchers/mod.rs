// URL Matchers
//
// Pure functions from (URLs, rule set, tag) to matched URLs:
//
// - query: parameter names matched against Query rules for one tag
// - subdomain: raw substring search with Subdomain rules, tag-agnostic
// - generic: any parameterized URL, rule set ignored
//
// None of these deduplicate. A URL can come out of the query and subdomain
// matchers several times; the dispatcher collapses repeats afterwards.

pub mod generic;
pub mod query;
pub mod subdomain;

pub use generic::*;
pub use query::*;
pub use subdomain::*;
