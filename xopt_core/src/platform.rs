use std::fmt;

use crate::namespace::XmlnsInsertion;

/// Xaml namespace of the WPF/WinUI/UWP presentation layer.
pub const PRESENTATION_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml/presentation";
/// Xaml namespace of the MAUI presentation layer.
pub const MAUI_PRESENTATION_NAMESPACE: &str = "http://schemas.microsoft.com/dotnet/2021/maui";
/// Root namespace of Avalonia markup.
pub const AVALONIA_NAMESPACE: &str = "https://github.com/avaloniaui";
/// The xaml language namespace (`x:` by convention).
pub const DEFAULT_XAML_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml";
/// The 2009 xaml language namespace used by MAUI.
pub const MAUI_XAML_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2009/xaml";
/// Designer/Blend namespace (`d:` by convention).
pub const DESIGNER_NAMESPACE: &str = "http://schemas.microsoft.com/expression/blend/2008";
/// Markup-compatibility namespace (`mc:` by convention).
pub const MARKUP_COMPATIBILITY_NAMESPACE: &str =
	"http://schemas.openxmlformats.org/markup-compatibility/2006";
/// Namespace reserved for markup emitted by xopt optimizations.
pub const XOPT_XAML_NAMESPACE: &str = "http://xopt.dev/xaml";

/// Conventional prefix of [`DEFAULT_XAML_NAMESPACE`].
pub const XAML_PREFIX: &str = "x";
/// Conventional prefix of [`DESIGNER_NAMESPACE`].
pub const DESIGNER_PREFIX: &str = "d";
/// Conventional prefix of [`MARKUP_COMPATIBILITY_NAMESPACE`].
pub const MARKUP_COMPATIBILITY_PREFIX: &str = "mc";

/// The xaml dialects optimizations can target.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum XamlPlatform {
	Wpf,
	Maui,
	WinUi,
	Avalonia,
	Uwp,
	Xf,
}

impl fmt::Display for XamlPlatform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Wpf => "WPF",
			Self::Maui => "MAUI",
			Self::WinUi => "WinUI",
			Self::Avalonia => "Avalonia",
			Self::Uwp => "UWP",
			Self::Xf => "XF",
		};
		f.write_str(name)
	}
}

/// Build item classification for files an optimization emits or rewrites.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileAction {
	Compile,
	Page,
	EmbeddedResource,
	AdditionalFile,
	MauiXaml,
	AvaloniaXaml,
}

/// Per-platform namespace table: the URIs, prefixes and defaults an
/// optimization needs when it rewrites markup targeting that platform.
#[derive(Clone, Debug)]
pub struct XamlPlatformInfo {
	/// The platform this table describes.
	pub platform: XamlPlatform,
	/// Default namespace of presentation markup on this platform.
	pub presentation_namespace: &'static str,
	/// The xaml language namespace on this platform.
	pub xaml_namespace: &'static str,
	/// Designer namespace, identical across platforms.
	pub designer_namespace: &'static str,
	/// Markup-compatibility namespace, identical across platforms.
	pub markup_compatibility_namespace: &'static str,
	/// Build action markup files carry on this platform by default.
	pub default_file_action: FileAction,
	/// Anchor namespaces new xmlns declarations are inserted after.
	pub default_insert_after: [&'static str; 4],
}

impl XamlPlatformInfo {
	/// The default placement policy for xmlns declarations introduced on this
	/// platform: after the language, designer and markup-compatibility
	/// declarations.
	pub fn default_insertion(&self) -> XmlnsInsertion {
		XmlnsInsertion::after(self.default_insert_after)
	}
}

impl XamlPlatform {
	/// The namespace table for this platform.
	pub fn info(self) -> XamlPlatformInfo {
		let (presentation_namespace, xaml_namespace, default_file_action) = match self {
			Self::Wpf | Self::WinUi | Self::Uwp | Self::Xf => {
				(PRESENTATION_NAMESPACE, DEFAULT_XAML_NAMESPACE, FileAction::Page)
			}
			Self::Maui => (
				MAUI_PRESENTATION_NAMESPACE,
				MAUI_XAML_NAMESPACE,
				FileAction::MauiXaml,
			),
			Self::Avalonia => (
				AVALONIA_NAMESPACE,
				DEFAULT_XAML_NAMESPACE,
				FileAction::AvaloniaXaml,
			),
		};

		XamlPlatformInfo {
			platform: self,
			presentation_namespace,
			xaml_namespace,
			designer_namespace: DESIGNER_NAMESPACE,
			markup_compatibility_namespace: MARKUP_COMPATIBILITY_NAMESPACE,
			default_file_action,
			default_insert_after: [
				xaml_namespace,
				DESIGNER_NAMESPACE,
				MARKUP_COMPATIBILITY_NAMESPACE,
				XOPT_XAML_NAMESPACE,
			],
		}
	}
}
