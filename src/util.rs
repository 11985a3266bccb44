use std::num::ParseIntError;

use crate::element::Element;
use crate::error::Error;

pub fn xpath_attribute(xpath: &str, attribute_name: &str) -> String {
    let mut xpath = String::from(xpath);
    xpath.push_str("[@");
    xpath.push_str(attribute_name);
    xpath.push(']');
    xpath
}

/// Extends `parent` with one path step, naming the entity when its name is known.
pub fn xpath_element(parent: &str, element: &str, name: Option<&str>) -> String {
    let mut xpath = String::from(parent);
    xpath.push('/');
    xpath.push_str(element);
    if let Some(name) = name {
        xpath.push_str("[@name='");
        xpath.push_str(name);
        xpath.push_str("']");
    }
    xpath
}

//--------------------------------------------------------------------------------------------------
/// Splits a comma-separated attribute value into trimmed, non-empty tokens.
///
/// Returns `None` when the attribute is absent, which is distinct from an
/// empty list.
///
/// ```
/// assert_eq!(vk_registry::split_list(None), None);
/// assert_eq!(
///     vk_registry::split_list(Some("graphics, compute")),
///     Some(vec![String::from("graphics"), String::from("compute")])
/// );
/// ```
pub fn split_list(text: Option<&str>) -> Option<Vec<String>> {
    text.map(|text| {
        text.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    })
}

/// The `optional` rule shared by struct members and command parameters.
///
/// Multi-indirection pointers carry one flag per level (`"true,false"`). Only
/// the first level is inspected, so `"false,true"` reads as not optional.
pub fn is_optional_flag(text: Option<&str>) -> bool {
    match text {
        Some(text) => text == "true" || text.starts_with("true,"),
        None => false,
    }
}

/// `true` iff the attribute is present and exactly `"true"`.
pub fn is_true(text: Option<&str>) -> bool {
    text == Some("true")
}

pub fn parse_integer(xpath: &str, attribute: &str, text: &str) -> Result<i64, Error> {
    parse_radix(xpath, attribute, text, i64::from_str_radix)
}

/// Like `parse_integer`, for attributes that must fit an unsigned 32-bit value.
pub fn parse_unsigned(xpath: &str, attribute: &str, text: &str) -> Result<u32, Error> {
    parse_radix(xpath, attribute, text, u32::from_str_radix)
}

fn parse_radix<T>(
    xpath: &str,
    attribute: &str,
    text: &str,
    from_str_radix: fn(&str, u32) -> Result<T, ParseIntError>,
) -> Result<T, Error> {
    let parse_res = match text.strip_prefix("0x") {
        Some(hex) => from_str_radix(hex, 16),
        None => from_str_radix(text, 10),
    };

    parse_res.map_err(|error| Error::MalformedValue {
        xpath: xpath_attribute(xpath, attribute),
        attribute: String::from(attribute),
        text: String::from(text),
        error,
    })
}

//--------------------------------------------------------------------------------------------------
pub fn required_attribute(xpath: &str, element: &Element, name: &str) -> Result<String, Error> {
    element
        .attribute(name)
        .map(String::from)
        .ok_or_else(|| Error::missing_attribute(xpath, name))
}

pub fn optional_attribute(element: &Element, name: &str) -> Option<String> {
    element.attribute(name).map(String::from)
}

/// Text of the first child element called `name`.
pub fn child_text(element: &Element, name: &str) -> Option<String> {
    element.first_element(name).map(Element::text)
}

/// Parses every token of a closed-vocabulary list, failing on the first unknown one.
pub fn parse_token_list<T>(
    xpath: &str,
    element: &Element,
    attribute: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<Vec<T>>, Error> {
    match split_list(element.attribute(attribute)) {
        Some(tokens) => tokens
            .iter()
            .map(|token| parse(token).ok_or_else(|| Error::unrecognized(xpath, attribute, token)))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        None => Ok(None),
    }
}
