use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Serialize;

/// A node in a parsed script output tree: either a leaf string or a nested
/// mapping. No fixed schema; the shape is whatever the script printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScriptValue {
    Leaf(String),
    Map(BTreeMap<String, ScriptValue>),
}

/// Structured key/value output collected from one forge script invocation.
///
/// Deploy scripts print lines of the form `dotted.key:value` among their
/// regular logs; dots in the key denote nesting depth. Later steps pull
/// addresses produced by earlier steps out of this tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScriptValues(BTreeMap<String, ScriptValue>);

/// A dotted path was used both as a value and as a nested key, e.g. `a:1`
/// followed by `a.b:2`. The resulting tree would depend on line order, so
/// this is rejected outright.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("conflicting script output: `{path}` is used both as a value and as a nested key")]
pub struct ParseConflict {
    pub path: String,
}

impl ScriptValues {
    /// Parse the complete stdout text of one invocation.
    ///
    /// Each line is trimmed and matched against `key:value`: the key (trimmed
    /// at the colon boundary) must be non-empty and contain no whitespace or
    /// colon, and the value (the rest of the line) must be non-empty before
    /// trimming. Anything else, such as forge logs, blank lines and
    /// diagnostics, is skipped without error. A duplicate key overwrites the
    /// previous value; a prefix collision is a [`ParseConflict`].
    pub fn parse(output: &str) -> Result<Self, ParseConflict> {
        let mut root = BTreeMap::new();
        for line in output.lines() {
            let line = line.trim();
            let Some((key, value)) = match_line(line) else {
                continue;
            };
            insert(&mut root, key, value.trim().to_string())?;
        }
        Ok(Self(root))
    }

    /// Look up a leaf by dotted path.
    pub fn get(&self, dotted: &str) -> Option<&str> {
        let mut node = &self.0;
        let mut segments = dotted.split('.').peekable();
        while let Some(segment) = segments.next() {
            match (node.get(segment)?, segments.peek()) {
                (ScriptValue::Leaf(leaf), None) => return Some(leaf),
                (ScriptValue::Map(map), Some(_)) => node = map,
                _ => return None,
            }
        }
        None
    }

    /// Look up a nested mapping by dotted path.
    pub fn get_map(&self, dotted: &str) -> Option<&BTreeMap<String, ScriptValue>> {
        let mut node = &self.0;
        for segment in dotted.split('.') {
            match node.get(segment)? {
                ScriptValue::Map(map) => node = map,
                ScriptValue::Leaf(_) => return None,
            }
        }
        Some(node)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, ScriptValue> {
        &self.0
    }
}

fn match_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() || key.chars().any(char::is_whitespace) {
        return None;
    }
    if value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn insert(
    root: &mut BTreeMap<String, ScriptValue>,
    dotted: &str,
    value: String,
) -> Result<(), ParseConflict> {
    let segments: Vec<&str> = dotted.split('.').collect();
    let Some((last, parents)) = segments.split_last() else {
        return Ok(());
    };

    let mut node = root;
    let mut walked = String::new();
    for segment in parents {
        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(segment);
        let entry = node
            .entry(segment.to_string())
            .or_insert_with(|| ScriptValue::Map(BTreeMap::new()));
        node = match entry {
            ScriptValue::Map(map) => map,
            ScriptValue::Leaf(_) => return Err(ParseConflict { path: walked }),
        };
    }

    match node.entry(last.to_string()) {
        Entry::Vacant(entry) => {
            entry.insert(ScriptValue::Leaf(value));
        }
        Entry::Occupied(mut entry) => match entry.get_mut() {
            // Last write wins for an exact duplicate key.
            ScriptValue::Leaf(leaf) => *leaf = value,
            ScriptValue::Map(_) => {
                return Err(ParseConflict {
                    path: dotted.to_string(),
                })
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: &str) -> ScriptValue {
        ScriptValue::Leaf(value.to_string())
    }

    #[test]
    fn test_single_nested_key() {
        let values = ScriptValues::parse("a.b.c:1").unwrap();
        assert_eq!(values.get("a.b.c"), Some("1"));
        let a = values.get_map("a").unwrap();
        let b = match a.get("b").unwrap() {
            ScriptValue::Map(map) => map,
            other => panic!("expected map, got {other:?}"),
        };
        assert_eq!(b.get("c"), Some(&leaf("1")));
    }

    #[test]
    fn test_flat_keys() {
        let values = ScriptValues::parse("x:1\ny:2").unwrap();
        assert_eq!(values.get("x"), Some("1"));
        assert_eq!(values.get("y"), Some("2"));
    }

    #[test]
    fn test_siblings_share_parent() {
        let values = ScriptValues::parse("a.b:1\na.c:2").unwrap();
        assert_eq!(values.get("a.b"), Some("1"));
        assert_eq!(values.get("a.c"), Some("2"));
        assert_eq!(values.get_map("a").unwrap().len(), 2);
    }

    #[test]
    fn test_value_trimmed_inner_spaces_kept() {
        let values = ScriptValues::parse("  spaced.key : value with spaces  ").unwrap();
        assert_eq!(values.get("spaced.key"), Some("value with spaces"));
    }

    #[test]
    fn test_key_with_whitespace_is_skipped() {
        // The key side of the pattern may not contain whitespace.
        let values = ScriptValues::parse("spaced key : value").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_non_matching_lines_skipped() {
        let values = ScriptValues::parse("not a valid line").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_forge_noise_ignored_around_values() {
        let output = "\
[⠊] Compiling...
Script ran successfully.

address.distributor:0xabc
Gas used: 1234
";
        let values = ScriptValues::parse(output).unwrap();
        assert_eq!(values.get("address.distributor"), Some("0xabc"));
        assert_eq!(values.as_map().len(), 1);
    }

    #[test]
    fn test_empty_value_is_no_match() {
        let values = ScriptValues::parse("key:").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_value_may_contain_colons() {
        let values = ScriptValues::parse("url:http://localhost:8545").unwrap();
        assert_eq!(values.get("url"), Some("http://localhost:8545"));
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let values = ScriptValues::parse("a.b:1\na.b:2").unwrap();
        assert_eq!(values.get("a.b"), Some("2"));
    }

    #[test]
    fn test_unrelated_paths_are_order_independent() {
        let forward = ScriptValues::parse("a.b:1\nc.d:2\ne:3").unwrap();
        let reversed = ScriptValues::parse("e:3\nc.d:2\na.b:1").unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_leaf_then_nested_is_a_conflict() {
        let err = ScriptValues::parse("a:1\na.b:2").unwrap_err();
        assert_eq!(err.path, "a");
    }

    #[test]
    fn test_nested_then_leaf_is_a_conflict() {
        let err = ScriptValues::parse("a.b:2\na:1").unwrap_err();
        assert_eq!(err.path, "a");
    }

    #[test]
    fn test_deep_prefix_conflict_names_the_path() {
        let err = ScriptValues::parse("a.b.c:1\na.b:2").unwrap_err();
        assert_eq!(err.path, "a.b");
    }

    #[test]
    fn test_missing_lookup() {
        let values = ScriptValues::parse("a.b:1").unwrap();
        assert_eq!(values.get("a"), None);
        assert_eq!(values.get("a.b.c"), None);
        assert_eq!(values.get("a.x"), None);
    }

    #[test]
    fn test_serializes_as_nested_json() {
        let values = ScriptValues::parse("address.proxy:0x1\naddress.impl:0x2").unwrap();
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["address"]["proxy"], "0x1");
        assert_eq!(json["address"]["impl"], "0x2");
    }
}
