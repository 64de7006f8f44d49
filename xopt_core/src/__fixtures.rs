use crate::Document;
use crate::Element;
use crate::XamlFile;
use crate::XamlFiles;
use crate::platform::DEFAULT_XAML_NAMESPACE;
use crate::platform::MARKUP_COMPATIBILITY_NAMESPACE;
use crate::platform::PRESENTATION_NAMESPACE;

pub const PRESENTATION_OPTIONS_NAMESPACE: &str =
	"http://schemas.microsoft.com/winfx/2006/xaml/presentation/options";
pub const PO_PREFIX: &str = "po";
pub const LOCAL_NAMESPACE: &str = "clr-namespace:Xopt.Sample";

/// The dictionary most scenarios start from: default, `x:` and `mc:`
/// declarations plus two brush resources.
pub fn resource_dictionary() -> Element {
	Element::new("ResourceDictionary")
		.with_attribute("xmlns", PRESENTATION_NAMESPACE)
		.with_attribute("xmlns:x", DEFAULT_XAML_NAMESPACE)
		.with_attribute("xmlns:mc", MARKUP_COMPATIBILITY_NAMESPACE)
		.with_child(
			Element::new("SolidColorBrush")
				.with_attribute("x:Key", "AccentBrush")
				.with_attribute("Color", "#AAAAAA"),
		)
		.with_child(
			Element::new("SolidColorBrush")
				.with_attribute("x:Key", "BackgroundBrush")
				.with_attribute("Color", "#111111"),
		)
}

pub fn xaml_file(name: &str) -> XamlFile {
	XamlFile::new(Document::new(resource_dictionary()), name, "\n")
}

pub fn xaml_files(names: &[&str], max_parallelism: usize) -> XamlFiles {
	XamlFiles::with_parallelism(
		names.iter().map(|name| xaml_file(name)).collect(),
		max_parallelism,
	)
}

pub fn attribute_names(element: &Element) -> Vec<String> {
	element
		.attributes()
		.map(|(name, _)| name.to_string())
		.collect()
}
