/// Primitive element tags accepted without registration.
///
/// Kept in ascending order; membership is checked with a binary search.
pub const DOM_ELEMENTS: &[&str] = &[
    "a", "article", "button", "circle", "div", "em", "footer", "form", "h1", "h2", "h3", "h4",
    "h5", "h6", "header", "hr", "img", "input", "label", "li", "main", "nav", "option", "p",
    "path", "rect", "section", "select", "span", "strong", "svg", "table", "tbody", "td", "text",
    "textarea", "th", "thead", "tr", "ul",
];

/// Whether `name` is one of the primitive element tags.
pub fn is_dom_element(name: &str) -> bool {
    DOM_ELEMENTS.binary_search(&name).is_ok()
}
