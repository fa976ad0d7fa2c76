//! JSON element selectors as accepted by the element tools.

use macos_use_sdk::proto::{
    element_selector::Criteria, AttributeSelector, CompoundOperator, CompoundSelector,
    ElementSelector, PositionSelector,
};
use rmcp::{schemars, schemars::JsonSchema};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SelectorSpec {
    #[schemars(description = "Accessibility role, e.g. AXButton")]
    pub role: Option<String>,
    #[schemars(description = "Exact text/title match")]
    pub text: Option<String>,
    #[schemars(description = "Substring of the text/title")]
    pub text_contains: Option<String>,
    #[schemars(description = "Regular expression matched against the text/title")]
    pub text_regex: Option<String>,
    #[schemars(description = "Screen point the element must contain")]
    pub position: Option<PositionSpec>,
    #[schemars(description = "Accessibility attribute values that must all match")]
    pub attributes: Option<HashMap<String, String>>,
    #[schemars(description = "All nested selectors must match")]
    pub and: Option<Vec<SelectorSpec>>,
    #[schemars(description = "Any nested selector may match")]
    pub or: Option<Vec<SelectorSpec>>,
    #[schemars(description = "Nested selector that must not match")]
    pub not: Option<Box<SelectorSpec>>,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
pub struct PositionSpec {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    #[schemars(description = "Allowed distance in points")]
    pub tolerance: Option<f64>,
}

fn compound(operator: CompoundOperator, selectors: Vec<ElementSelector>) -> ElementSelector {
    ElementSelector {
        criteria: Some(Criteria::Compound(CompoundSelector {
            operator: operator as i32,
            selectors,
        })),
    }
}

fn single(criteria: Criteria) -> ElementSelector {
    ElementSelector {
        criteria: Some(criteria),
    }
}

impl SelectorSpec {
    /// Builds the wire selector. Several criteria on one level are ANDed.
    pub fn into_proto(self) -> Result<ElementSelector, String> {
        let mut parts = Vec::new();

        if let Some(role) = self.role {
            parts.push(single(Criteria::Role(role)));
        }
        if let Some(text) = self.text {
            parts.push(single(Criteria::Text(text)));
        }
        if let Some(text) = self.text_contains {
            parts.push(single(Criteria::TextContains(text)));
        }
        if let Some(pattern) = self.text_regex {
            parts.push(single(Criteria::TextRegex(pattern)));
        }
        if let Some(pos) = self.position {
            parts.push(single(Criteria::Position(PositionSelector {
                x: pos.x,
                y: pos.y,
                tolerance: pos.tolerance.unwrap_or_default(),
            })));
        }
        if let Some(attributes) = self.attributes {
            parts.push(single(Criteria::Attributes(AttributeSelector { attributes })));
        }
        if let Some(all) = self.and {
            parts.push(compound(CompoundOperator::And, Self::convert_all(all, "and")?));
        }
        if let Some(any) = self.or {
            parts.push(compound(CompoundOperator::Or, Self::convert_all(any, "or")?));
        }
        if let Some(inner) = self.not {
            parts.push(compound(CompoundOperator::Not, vec![inner.into_proto()?]));
        }

        match parts.len() {
            0 => Err("selector must specify at least one criterion".to_string()),
            1 => Ok(parts.remove(0)),
            _ => Ok(compound(CompoundOperator::And, parts)),
        }
    }

    fn convert_all(specs: Vec<SelectorSpec>, operator: &str) -> Result<Vec<ElementSelector>, String> {
        if specs.is_empty() {
            return Err(format!("'{operator}' selector list must not be empty"));
        }
        specs.into_iter().map(SelectorSpec::into_proto).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn parse(value: Value) -> Result<ElementSelector, String> {
        serde_json::from_value::<SelectorSpec>(value)
            .map_err(|e| e.to_string())?
            .into_proto()
    }

    #[test]
    fn test_single_role() {
        let selector = parse(json!({"role": "AXButton"})).unwrap();
        assert_eq!(selector.criteria, Some(Criteria::Role("AXButton".into())));
    }

    #[test]
    fn test_multiple_criteria_are_anded() {
        let selector = parse(json!({"role": "AXButton", "text_contains": "Save"})).unwrap();
        match selector.criteria {
            Some(Criteria::Compound(c)) => {
                assert_eq!(c.operator, CompoundOperator::And as i32);
                assert_eq!(c.selectors.len(), 2);
            }
            other => panic!("expected compound, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_not_and_or() {
        let selector = parse(json!({
            "or": [{"role": "AXButton"}, {"not": {"text": "Cancel"}}]
        }))
        .unwrap();
        let Some(Criteria::Compound(or)) = selector.criteria else {
            panic!("expected compound");
        };
        assert_eq!(or.operator, CompoundOperator::Or as i32);
        let Some(Criteria::Compound(not)) = &or.selectors[1].criteria else {
            panic!("expected nested not");
        };
        assert_eq!(not.operator, CompoundOperator::Not as i32);
    }

    #[test]
    fn test_empty_selector_is_rejected() {
        assert!(parse(json!({})).is_err());
        assert!(parse(json!({"and": []})).is_err());
        assert!(parse(json!({"colour": "red"})).is_err());
    }
}
