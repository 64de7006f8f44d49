use indexmap::IndexMap;

/// Name of the default namespace declaration attribute.
pub const XMLNS: &str = "xmlns";

/// Attribute name declaring the namespace bound to `prefix` (`xmlns:prefix`),
/// or the default declaration name when the prefix is empty.
pub fn xmlns_attribute_name(prefix: &str) -> String {
	if prefix.is_empty() {
		XMLNS.to_string()
	} else {
		format!("{XMLNS}:{prefix}")
	}
}

/// An element in a xaml document tree: a name, an ordered attribute list and
/// child elements.
///
/// Attribute order is significant — the host tree indexes attributes by
/// declaration order and serializes them back out in that order — so the
/// attribute list is an insertion-ordered map keyed by attribute name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
	name: String,
	attributes: IndexMap<String, String>,
	children: Vec<Element>,
}

impl Element {
	/// Creates an element without attributes or children.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attributes: IndexMap::new(),
			children: Vec::new(),
		}
	}

	/// The element name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The value of the attribute named `name`.
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	/// Whether an attribute named `name` exists.
	pub fn has_attribute(&self, name: &str) -> bool {
		self.attributes.contains_key(name)
	}

	/// Sets `name` to `value`, appending the attribute when it is new and
	/// keeping its position when it already exists.
	pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.attributes.insert(name.into(), value.into());
	}

	/// Builder form of [`Element::set_attribute`].
	#[must_use]
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set_attribute(name, value);
		self
	}

	/// The attributes in declaration order.
	pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attributes
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Number of attributes.
	pub fn attribute_count(&self) -> usize {
		self.attributes.len()
	}

	/// Replaces the entire attribute list in one step. A reader of this
	/// element never observes a partially rebuilt list.
	pub fn replace_attributes(&mut self, attributes: IndexMap<String, String>) {
		self.attributes = attributes;
	}

	/// The child elements in document order.
	pub fn children(&self) -> &[Element] {
		&self.children
	}

	/// Mutable access to the child elements.
	pub fn children_mut(&mut self) -> &mut Vec<Element> {
		&mut self.children
	}

	/// Appends a child element.
	pub fn push_child(&mut self, child: Element) {
		self.children.push(child);
	}

	/// Builder form of [`Element::push_child`].
	#[must_use]
	pub fn with_child(mut self, child: Element) -> Self {
		self.push_child(child);
		self
	}
}

/// A parsed xaml document. Loading and serialization belong to the build
/// tooling that owns the files; this crate only rewrites the tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
	root: Element,
}

impl Document {
	/// Creates a document from its root element.
	pub fn new(root: Element) -> Self {
		Self { root }
	}

	/// The root element.
	pub fn root(&self) -> &Element {
		&self.root
	}

	/// Mutable access to the root element.
	pub fn root_mut(&mut self) -> &mut Element {
		&mut self.root
	}
}
