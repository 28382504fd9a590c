//! Static tag-name lookup tables.
//!
//! Two parallel mappings over the standard HTML element set, built once at
//! first use and never mutated (safe for concurrent reads by construction):
//!
//! - tag name → DOM interface name (`span` → `HTMLSpanElement`), used by
//!   both jump paths to pick the interface to search
//! - tag name → template-dialect attribute-bag interface name
//!   (`span` → `HTMLAttributes`), the companion dataset for hosts that
//!   index the dialect's own typings
//!
//! Lookups are case-sensitive exact matches; an absent tag means
//! "unsupported or custom element" and is not an error.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Map an element tag name to its DOM interface name.
pub fn dom_interface_for(tag: &str) -> Option<&'static str> {
    DOM_INTERFACES.get(tag).copied()
}

/// Map an element tag name to its template-dialect attributes interface name.
pub fn attributes_interface_for(tag: &str) -> Option<&'static str> {
    ATTRIBUTE_INTERFACES.get(tag).copied()
}

static DOM_INTERFACES: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| DOM_INTERFACE_ENTRIES.iter().copied().collect());

static ATTRIBUTE_INTERFACES: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| ATTRIBUTE_INTERFACE_ENTRIES.iter().copied().collect());

const DOM_INTERFACE_ENTRIES: &[(&str, &str)] = &[
    ("a", "HTMLAnchorElement"),
    ("abbr", "HTMLElement"),
    ("address", "HTMLElement"),
    ("area", "HTMLAreaElement"),
    ("article", "HTMLElement"),
    ("aside", "HTMLElement"),
    ("audio", "HTMLAudioElement"),
    ("b", "HTMLElement"),
    ("base", "HTMLBaseElement"),
    ("bdi", "HTMLElement"),
    ("bdo", "HTMLElement"),
    ("blockquote", "HTMLQuoteElement"),
    ("body", "HTMLBodyElement"),
    ("br", "HTMLBRElement"),
    ("button", "HTMLButtonElement"),
    ("canvas", "HTMLCanvasElement"),
    ("caption", "HTMLTableCaptionElement"),
    ("cite", "HTMLElement"),
    ("code", "HTMLElement"),
    ("col", "HTMLTableColElement"),
    ("colgroup", "HTMLTableColElement"),
    ("data", "HTMLDataElement"),
    ("datalist", "HTMLDataListElement"),
    ("dd", "HTMLElement"),
    ("del", "HTMLModElement"),
    ("details", "HTMLDetailsElement"),
    ("dfn", "HTMLElement"),
    ("dialog", "HTMLDialogElement"),
    ("div", "HTMLDivElement"),
    ("dl", "HTMLDListElement"),
    ("dt", "HTMLElement"),
    ("em", "HTMLElement"),
    ("embed", "HTMLEmbedElement"),
    ("fieldset", "HTMLFieldSetElement"),
    ("figcaption", "HTMLElement"),
    ("figure", "HTMLElement"),
    ("footer", "HTMLElement"),
    ("form", "HTMLFormElement"),
    ("h1", "HTMLHeadingElement"),
    ("h2", "HTMLHeadingElement"),
    ("h3", "HTMLHeadingElement"),
    ("h4", "HTMLHeadingElement"),
    ("h5", "HTMLHeadingElement"),
    ("h6", "HTMLHeadingElement"),
    ("head", "HTMLHeadElement"),
    ("header", "HTMLElement"),
    ("hgroup", "HTMLElement"),
    ("hr", "HTMLHRElement"),
    ("html", "HTMLHtmlElement"),
    ("i", "HTMLElement"),
    ("iframe", "HTMLIFrameElement"),
    ("img", "HTMLImageElement"),
    ("input", "HTMLInputElement"),
    ("ins", "HTMLModElement"),
    ("kbd", "HTMLElement"),
    ("label", "HTMLLabelElement"),
    ("legend", "HTMLLegendElement"),
    ("li", "HTMLLIElement"),
    ("link", "HTMLLinkElement"),
    ("main", "HTMLElement"),
    ("map", "HTMLMapElement"),
    ("mark", "HTMLElement"),
    ("menu", "HTMLMenuElement"),
    ("meta", "HTMLMetaElement"),
    ("meter", "HTMLMeterElement"),
    ("nav", "HTMLElement"),
    ("noscript", "HTMLElement"),
    ("object", "HTMLObjectElement"),
    ("ol", "HTMLOListElement"),
    ("optgroup", "HTMLOptGroupElement"),
    ("option", "HTMLOptionElement"),
    ("output", "HTMLOutputElement"),
    ("p", "HTMLParagraphElement"),
    ("picture", "HTMLPictureElement"),
    ("pre", "HTMLPreElement"),
    ("progress", "HTMLProgressElement"),
    ("q", "HTMLQuoteElement"),
    ("rp", "HTMLElement"),
    ("rt", "HTMLElement"),
    ("ruby", "HTMLElement"),
    ("s", "HTMLElement"),
    ("samp", "HTMLElement"),
    ("script", "HTMLScriptElement"),
    ("search", "HTMLElement"),
    ("section", "HTMLElement"),
    ("select", "HTMLSelectElement"),
    ("slot", "HTMLSlotElement"),
    ("small", "HTMLElement"),
    ("source", "HTMLSourceElement"),
    ("span", "HTMLSpanElement"),
    ("strong", "HTMLElement"),
    ("style", "HTMLStyleElement"),
    ("sub", "HTMLElement"),
    ("summary", "HTMLElement"),
    ("sup", "HTMLElement"),
    ("table", "HTMLTableElement"),
    ("tbody", "HTMLTableSectionElement"),
    ("td", "HTMLTableCellElement"),
    ("template", "HTMLTemplateElement"),
    ("textarea", "HTMLTextAreaElement"),
    ("tfoot", "HTMLTableSectionElement"),
    ("th", "HTMLTableCellElement"),
    ("thead", "HTMLTableSectionElement"),
    ("time", "HTMLTimeElement"),
    ("title", "HTMLTitleElement"),
    ("tr", "HTMLTableRowElement"),
    ("track", "HTMLTrackElement"),
    ("u", "HTMLElement"),
    ("ul", "HTMLUListElement"),
    ("var", "HTMLElement"),
    ("video", "HTMLVideoElement"),
    ("wbr", "HTMLElement"),
];

const ATTRIBUTE_INTERFACE_ENTRIES: &[(&str, &str)] = &[
    ("a", "AnchorHTMLAttributes"),
    ("abbr", "HTMLAttributes"),
    ("address", "HTMLAttributes"),
    ("area", "AreaHTMLAttributes"),
    ("article", "HTMLAttributes"),
    ("aside", "HTMLAttributes"),
    ("audio", "AudioHTMLAttributes"),
    ("b", "HTMLAttributes"),
    ("base", "BaseHTMLAttributes"),
    ("bdi", "HTMLAttributes"),
    ("bdo", "HTMLAttributes"),
    ("blockquote", "QuoteHTMLAttributes"),
    ("body", "BodyHTMLAttributes"),
    ("br", "BRHTMLAttributes"),
    ("button", "ButtonHTMLAttributes"),
    ("canvas", "CanvasHTMLAttributes"),
    ("caption", "TableCaptionHTMLAttributes"),
    ("cite", "HTMLAttributes"),
    ("code", "HTMLAttributes"),
    ("col", "TableColHTMLAttributes"),
    ("colgroup", "TableColHTMLAttributes"),
    ("data", "DataHTMLAttributes"),
    ("datalist", "DataListHTMLAttributes"),
    ("dd", "HTMLAttributes"),
    ("del", "ModHTMLAttributes"),
    ("details", "DetailsHTMLAttributes"),
    ("dfn", "HTMLAttributes"),
    ("dialog", "DialogHTMLAttributes"),
    ("div", "DivHTMLAttributes"),
    ("dl", "DListHTMLAttributes"),
    ("dt", "HTMLAttributes"),
    ("em", "HTMLAttributes"),
    ("embed", "EmbedHTMLAttributes"),
    ("fieldset", "FieldSetHTMLAttributes"),
    ("figcaption", "HTMLAttributes"),
    ("figure", "HTMLAttributes"),
    ("footer", "HTMLAttributes"),
    ("form", "FormHTMLAttributes"),
    ("h1", "HeadingHTMLAttributes"),
    ("h2", "HeadingHTMLAttributes"),
    ("h3", "HeadingHTMLAttributes"),
    ("h4", "HeadingHTMLAttributes"),
    ("h5", "HeadingHTMLAttributes"),
    ("h6", "HeadingHTMLAttributes"),
    ("head", "HeadHTMLAttributes"),
    ("header", "HTMLAttributes"),
    ("hgroup", "HTMLAttributes"),
    ("hr", "HRHTMLAttributes"),
    ("html", "HtmlHTMLAttributes"),
    ("i", "HTMLAttributes"),
    ("iframe", "IFrameHTMLAttributes"),
    ("img", "ImageHTMLAttributes"),
    ("input", "InputHTMLAttributes"),
    ("ins", "ModHTMLAttributes"),
    ("kbd", "HTMLAttributes"),
    ("label", "LabelHTMLAttributes"),
    ("legend", "LegendHTMLAttributes"),
    ("li", "LIHTMLAttributes"),
    ("link", "LinkHTMLAttributes"),
    ("main", "HTMLAttributes"),
    ("map", "MapHTMLAttributes"),
    ("mark", "HTMLAttributes"),
    ("menu", "MenuHTMLAttributes"),
    ("meta", "MetaHTMLAttributes"),
    ("meter", "MeterHTMLAttributes"),
    ("nav", "HTMLAttributes"),
    ("noscript", "HTMLAttributes"),
    ("object", "ObjectHTMLAttributes"),
    ("ol", "OListHTMLAttributes"),
    ("optgroup", "OptGroupHTMLAttributes"),
    ("option", "OptionHTMLAttributes"),
    ("output", "OutputHTMLAttributes"),
    ("p", "ParagraphHTMLAttributes"),
    ("picture", "PictureHTMLAttributes"),
    ("pre", "PreHTMLAttributes"),
    ("progress", "ProgressHTMLAttributes"),
    ("q", "QuoteHTMLAttributes"),
    ("rp", "HTMLAttributes"),
    ("rt", "HTMLAttributes"),
    ("ruby", "HTMLAttributes"),
    ("s", "HTMLAttributes"),
    ("samp", "HTMLAttributes"),
    ("script", "ScriptHTMLAttributes"),
    ("search", "HTMLAttributes"),
    ("section", "HTMLAttributes"),
    ("select", "SelectHTMLAttributes"),
    ("slot", "SlotHTMLAttributes"),
    ("small", "HTMLAttributes"),
    ("source", "SourceHTMLAttributes"),
    ("span", "HTMLAttributes"),
    ("strong", "HTMLAttributes"),
    ("style", "StyleHTMLAttributes"),
    ("sub", "HTMLAttributes"),
    ("summary", "HTMLAttributes"),
    ("sup", "HTMLAttributes"),
    ("table", "TableHTMLAttributes"),
    ("tbody", "TableSectionHTMLAttributes"),
    ("td", "TableCellHTMLAttributes"),
    ("template", "TemplateHTMLAttributes"),
    ("textarea", "TextAreaHTMLAttributes"),
    ("tfoot", "TableSectionHTMLAttributes"),
    ("th", "TableCellHTMLAttributes"),
    ("thead", "TableSectionHTMLAttributes"),
    ("time", "TimeHTMLAttributes"),
    ("title", "TitleHTMLAttributes"),
    ("tr", "TableRowHTMLAttributes"),
    ("track", "TrackHTMLAttributes"),
    ("u", "HTMLAttributes"),
    ("ul", "UListHTMLAttributes"),
    ("var", "HTMLAttributes"),
    ("video", "VideoHTMLAttributes"),
    ("wbr", "HTMLAttributes"),
];
