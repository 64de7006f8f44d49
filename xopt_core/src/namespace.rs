use indexmap::IndexMap;

use crate::xml::Element;
use crate::xml::XMLNS;
use crate::xml::xmlns_attribute_name;

/// A namespace declaration attribute on an element.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XmlnsDeclaration {
	/// The prefix the declaration binds (empty for the default namespace).
	pub prefix: String,
	/// The full attribute name (`xmlns` or `xmlns:prefix`).
	pub attribute_name: String,
	/// The declared namespace URI.
	pub uri: String,
	/// Position of the declaration in the element's attribute list.
	pub index: usize,
}

/// Placement policy for a newly allocated xmlns declaration.
///
/// The new attribute goes immediately after the last attribute whose *value*
/// matches one of the anchor namespaces, or at the end of the list when none
/// is present; the computed index is then clamped down to
/// `max_insert_index`, so anchors occurring beyond the bound are effectively
/// ignored.
#[derive(Clone, Debug, Default)]
pub struct XmlnsInsertion {
	/// Anchor namespace URIs, matched against attribute values in order of
	/// appearance on the element.
	pub insert_after: Vec<String>,
	/// Upper bound on the insertion index.
	pub max_insert_index: Option<usize>,
}

impl XmlnsInsertion {
	/// A policy inserting after the given anchor namespaces, unbounded.
	pub fn after<I>(anchors: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		Self {
			insert_after: anchors.into_iter().map(Into::into).collect(),
			max_insert_index: None,
		}
	}

	/// A policy appending at the end of the attribute list.
	pub fn at_end() -> Self {
		Self::default()
	}

	/// Bounds the insertion index from above.
	#[must_use]
	pub fn with_max_insert_index(mut self, max_insert_index: usize) -> Self {
		self.max_insert_index = Some(max_insert_index);
		self
	}
}

/// Ensures `uri` is declared as an xmlns attribute on `element` and returns
/// the declaration.
///
/// Lookup goes by namespace value alone: when any declaration already binds
/// `uri`, it is returned as-is — whatever prefix it uses — and the element is
/// not touched, making the operation idempotent. Otherwise a declaration is
/// added under `preferred_prefix`, falling back to `preferred_prefix1`,
/// `preferred_prefix2`, … while the prefix already binds a different
/// namespace, so no existing declaration is ever overwritten or shadowed.
///
/// The new attribute is placed according to `insertion`; the relative order
/// of all pre-existing attributes is preserved exactly, and the attribute
/// list is swapped in a single step.
pub fn ensure_xmlns_attribute(
	element: &mut Element,
	uri: &str,
	preferred_prefix: &str,
	insertion: &XmlnsInsertion,
) -> XmlnsDeclaration {
	if let Some(existing) = find_declaration(element, uri) {
		return existing;
	}

	let attribute_name = allocate_attribute_name(element, preferred_prefix);
	let index = insertion_index(element, insertion);

	// Rebuild the full list and swap it in one step; the host tree indexes
	// attributes by declaration order, so an in-place insert at an arbitrary
	// index would be observable half-done.
	let mut attributes: IndexMap<String, String> = element
		.attributes()
		.map(|(name, value)| (name.to_string(), value.to_string()))
		.collect();
	attributes.shift_insert(index, attribute_name.clone(), uri.to_string());
	element.replace_attributes(attributes);

	XmlnsDeclaration {
		prefix: prefix_of(&attribute_name).to_string(),
		attribute_name,
		uri: uri.to_string(),
		index,
	}
}

/// The existing declaration of `uri` on `element`, whatever its prefix.
fn find_declaration(element: &Element, uri: &str) -> Option<XmlnsDeclaration> {
	element
		.attributes()
		.enumerate()
		.find_map(|(index, (name, value))| {
			(is_xmlns(name) && value == uri).then(|| {
				XmlnsDeclaration {
					prefix: prefix_of(name).to_string(),
					attribute_name: name.to_string(),
					uri: uri.to_string(),
					index,
				}
			})
		})
}

fn is_xmlns(attribute_name: &str) -> bool {
	attribute_name == XMLNS || attribute_name.starts_with("xmlns:")
}

fn prefix_of(attribute_name: &str) -> &str {
	attribute_name.strip_prefix("xmlns:").unwrap_or("")
}

/// First unused declaration name derived from `preferred_prefix` by appending
/// successive integer suffixes.
fn allocate_attribute_name(element: &Element, preferred_prefix: &str) -> String {
	let mut name = xmlns_attribute_name(preferred_prefix);
	let mut suffix = 1usize;
	while element.has_attribute(&name) {
		name = xmlns_attribute_name(&format!("{preferred_prefix}{suffix}"));
		suffix += 1;
	}
	name
}

/// Index right after the last anchor-valued attribute, or the end of the
/// list, clamped to the policy's upper bound and to the list length.
fn insertion_index(element: &Element, insertion: &XmlnsInsertion) -> usize {
	let last_anchor = element
		.attributes()
		.enumerate()
		.filter(|(_, (_, value))| {
			insertion
				.insert_after
				.iter()
				.any(|anchor| anchor == value)
		})
		.map(|(index, _)| index)
		.max();

	let index = last_anchor.map_or(element.attribute_count(), |last| last + 1);
	let index = insertion
		.max_insert_index
		.map_or(index, |bound| index.min(bound));
	index.min(element.attribute_count())
}
