use super::*;

#[component]
/// Pulsing placeholder block shown while content loads.
pub fn Skeleton(
    /// Extra layout class appended to the primitive base class.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Inline style, e.g. an explicit width for text placeholders.
    #[prop(optional, into)]
    style: Option<String>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-skeleton", layout_class)
            style=style
            data-ui-primitive="true"
            data-ui-kind="skeleton"
            aria-hidden="true"
        ></div>
    }
}

#[component]
/// Thin rule separating adjacent content regions.
pub fn Separator(
    /// Horizontal (default) or vertical rule.
    #[prop(optional)]
    orientation: SeparatorOrientation,
    /// Extra layout class appended to the primitive base class.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-separator", layout_class)
            role="separator"
            aria-orientation=orientation.token()
            data-ui-primitive="true"
            data-ui-kind="separator"
            data-ui-orientation=orientation.token()
        ></div>
    }
}
