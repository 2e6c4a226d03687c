//! Polymorphic prop forwarder.
//!
//! A wrapper component can declare "I render as whatever single element my
//! caller hands me": the caller supplies a [`SlotChild`], the wrapper supplies
//! an owner [`SlotProps`] bag, and [`render_slot`] merges the two onto the
//! child's own tag instead of introducing an extra wrapping element. This is
//! how a menu button renders as a router anchor without nesting an `<a>`
//! inside a `<button>`.
//!
//! Merge rules: CSS classes concatenate (owner classes first, then the
//! child's, so both rule sets apply); every other attribute is child-wins, so
//! wrapper defaults never clobber caller-specified values; when both sides
//! declare a click handler only the child's fires. The merge is pure and
//! recomputed per render pass; nothing is retained across renders.

use leptos::ev::{self, MouseEvent};
use leptos::html::{self, AnyElement, HtmlElement};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Closed set of tags a delegated child may render as.
pub enum SlotTag {
    /// `<a>` — navigation targets.
    Anchor,
    /// `<button type="button">`.
    Button,
    /// `<div>`.
    Div,
    /// `<span>`.
    Span,
}

#[derive(Clone, Default)]
/// Attribute/handler bag carried by a slot owner or a delegated child.
pub struct SlotProps {
    class: Option<String>,
    attrs: Vec<(&'static str, String)>,
    on_click: Option<Callback<MouseEvent>>,
}

impl SlotProps {
    /// Empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class list segment.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = Some(match self.class {
            Some(existing) => format!("{existing} {class}"),
            None => class,
        });
        self
    }

    /// Sets an attribute, replacing a previously set value for the same key.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Sets the click handler.
    pub fn on_click(mut self, handler: Callback<MouseEvent>) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Current class list, if any.
    pub fn class_value(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Current value for an attribute key, if set.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a click handler is attached.
    pub fn has_click_handler(&self) -> bool {
        self.on_click.is_some()
    }

    /// Merges an owner bag with a delegated child's own bag.
    ///
    /// Classes concatenate owner-first; the child wins any other attribute
    /// key present on both sides; the click handler is child-only when both
    /// declare one. Attribute order stays deterministic: owner order, with
    /// child-only keys appended.
    pub fn merge(owner: &Self, child: &Self) -> Self {
        let class = match (&owner.class, &child.class) {
            (Some(owner_class), Some(child_class)) => Some(format!("{owner_class} {child_class}")),
            (owner_class, child_class) => child_class.clone().or_else(|| owner_class.clone()),
        };

        let mut attrs = owner.attrs.clone();
        for (name, value) in &child.attrs {
            match attrs.iter_mut().find(|(key, _)| key == name) {
                Some(slot) => slot.1 = value.clone(),
                None => attrs.push((name, value.clone())),
            }
        }

        Self {
            class,
            attrs,
            on_click: merged_click(owner.on_click, child.on_click),
        }
    }
}

fn merged_click<T>(owner: Option<T>, child: Option<T>) -> Option<T> {
    child.or(owner)
}

#[derive(Clone)]
/// A structured element description a child delegates rendering to.
pub struct SlotElement {
    tag: SlotTag,
    props: SlotProps,
    body: ViewFn,
}

impl SlotElement {
    /// Element rendering as `tag` with no props and an empty body.
    pub fn new(tag: SlotTag) -> Self {
        Self {
            tag,
            props: SlotProps::default(),
            body: ViewFn::default(),
        }
    }

    /// Attaches the child's own declared props.
    pub fn with_props(mut self, props: SlotProps) -> Self {
        self.props = props;
        self
    }

    /// Attaches the child's inner content.
    pub fn with_body<V: IntoView>(mut self, body: impl Fn() -> V + 'static) -> Self {
        self.body = body.into();
        self
    }
}

#[derive(Clone)]
/// Content a slot owner can receive: plain text or a delegated element.
pub enum SlotChild {
    /// Plain text; wrapped in a neutral inline container at render time.
    Text(String),
    /// Structured element description; re-rendered with merged props.
    Element(SlotElement),
}

fn resolve_first(content: Vec<SlotChild>) -> Option<SlotChild> {
    // Only the first child is forwarded to; extras are a documented
    // simplification, not an error.
    content.into_iter().next()
}

fn slot_node(tag: SlotTag) -> HtmlElement<AnyElement> {
    match tag {
        SlotTag::Anchor => html::a().into_any(),
        SlotTag::Button => html::button().attr("type", "button").into_any(),
        SlotTag::Div => html::div().into_any(),
        SlotTag::Span => html::span().into_any(),
    }
}

fn apply_slot_props(node: HtmlElement<AnyElement>, props: SlotProps) -> HtmlElement<AnyElement> {
    let SlotProps {
        class,
        attrs,
        on_click,
    } = props;
    let mut node = node;
    if let Some(class) = class {
        node = node.attr("class", class);
    }
    for (name, value) in attrs {
        node = node.attr(name, value);
    }
    if let Some(on_click) = on_click {
        node = node.on(ev::click, move |event| on_click.call(event));
    }
    node
}

/// Resolves slot content against an owner bag and renders it.
///
/// Absent content renders nothing; plain text is wrapped in a `<span>`
/// carrying the owner bag; a delegated element is re-rendered as its own tag
/// with [`SlotProps::merge`]d props and its declared body.
pub fn render_slot(owner: SlotProps, content: Vec<SlotChild>) -> View {
    match resolve_first(content) {
        None => ().into_view(),
        Some(SlotChild::Text(text)) => apply_slot_props(html::span().into_any(), owner)
            .child(text)
            .into_view(),
        Some(SlotChild::Element(element)) => {
            let merged = SlotProps::merge(&owner, &element.props);
            apply_slot_props(slot_node(element.tag), merged)
                .child(element.body.run())
                .into_view()
        }
    }
}

#[component]
/// Component form of [`render_slot`] for direct use in views.
pub fn SlotOutlet(
    /// Owner attribute/handler bag applied to (or merged into) the content.
    #[prop(optional)]
    owner: SlotProps,
    /// Slot content; only the first entry is used.
    #[prop(optional)]
    content: Vec<SlotChild>,
) -> impl IntoView {
    render_slot(owner, content)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge_concatenates_classes_owner_first() {
        let owner = SlotProps::new().class("a").attr("title", "x");
        let child = SlotProps::new().class("b").attr("title", "y");

        let merged = SlotProps::merge(&owner, &child);

        assert_eq!(merged.class_value(), Some("a b"));
        assert_eq!(merged.attr_value("title"), Some("y"));
    }

    #[test]
    fn child_wins_attribute_conflicts_without_losing_owner_only_keys() {
        let owner = SlotProps::new()
            .attr("data-ui-kind", "menu-button")
            .attr("aria-current", "false");
        let child = SlotProps::new().attr("aria-current", "page").attr("href", "/docs");

        let merged = SlotProps::merge(&owner, &child);

        assert_eq!(merged.attr_value("data-ui-kind"), Some("menu-button"));
        assert_eq!(merged.attr_value("aria-current"), Some("page"));
        assert_eq!(merged.attr_value("href"), Some("/docs"));
    }

    #[test]
    fn missing_class_on_either_side_is_not_an_error() {
        let owner = SlotProps::new().class("a");
        let child = SlotProps::new();
        assert_eq!(SlotProps::merge(&owner, &child).class_value(), Some("a"));
        assert_eq!(SlotProps::merge(&child, &owner).class_value(), Some("a"));
        assert_eq!(SlotProps::merge(&child, &child).class_value(), None);
    }

    #[test]
    fn repeated_attr_on_builder_replaces_rather_than_duplicates() {
        let props = SlotProps::new().attr("title", "first").attr("title", "second");
        assert_eq!(props.attr_value("title"), Some("second"));
        assert_eq!(
            props
                .attrs
                .iter()
                .filter(|(key, _)| *key == "title")
                .count(),
            1
        );
    }

    #[test]
    fn click_handler_policy_is_child_only() {
        assert_eq!(merged_click(Some("owner"), Some("child")), Some("child"));
        assert_eq!(merged_click(Some("owner"), None), Some("owner"));
        assert_eq!(merged_click(None, Some("child")), Some("child"));
        assert_eq!(merged_click::<&str>(None, None), None);
    }

    #[test]
    fn first_child_wins_when_multiple_are_supplied() {
        let resolved = resolve_first(vec![
            SlotChild::Text("first".into()),
            SlotChild::Text("second".into()),
        ]);
        assert!(matches!(resolved, Some(SlotChild::Text(text)) if text == "first"));
    }

    #[test]
    fn empty_content_resolves_to_nothing() {
        assert!(resolve_first(Vec::new()).is_none());
    }

    #[test]
    fn outlet_props_coexist_with_the_attribute_bag() {
        let props = SlotOutletProps::builder().build();
        assert!(props.content.is_empty());
        assert!(!props.owner.has_click_handler());
    }
}
