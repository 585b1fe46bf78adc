//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use podium_harvester::xml::find_child;
///
/// let xml = r#"<record><title/><venue/></record>"#;
/// let doc = Document::parse(xml).unwrap();
/// let record = doc.root_element();
///
/// assert!(find_child(record, "venue").is_some());
/// assert!(find_child(record, "missing").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all child elements with the given tag name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find a descendant element matching a slash-separated path of tag names.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use podium_harvester::xml::find_by_path;
///
/// let xml = r#"<record><Title><title>De Meeuw</title></Title></record>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let title = find_by_path(doc.root_element(), "Title/title");
/// assert_eq!(title.unwrap().text(), Some("De Meeuw"));
/// ```
pub fn find_by_path<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    let mut current = node;
    for part in path.split('/') {
        current = find_child(current, part)?;
    }
    Some(current)
}

/// Collect the trimmed text of every element matching a slash-separated
/// path, in document order. Elements without text contribute an empty
/// string.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use podium_harvester::xml::collect_by_path;
///
/// let xml = r#"<record>
///     <producent><company>A</company><company>B</company></producent>
///     <producent><company>C</company></producent>
/// </record>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(collect_by_path(doc.root_element(), "producent/company"), ["A", "B", "C"]);
/// ```
pub fn collect_by_path(node: Node<'_, '_>, path: &str) -> Vec<String> {
    match path.split_once('/') {
        Some((head, rest)) => find_children(node, head)
            .flat_map(|child| collect_by_path(child, rest))
            .collect(),
        None => find_children(node, path).map(get_text).collect(),
    }
}

/// Get the text content of a node, trimmed. Empty string if no text.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
