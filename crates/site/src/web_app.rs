//! Demo shell exercising the sidebar layout controller and chrome primitives.

use layout_runtime::{
    LayoutProvider, Sidebar, SidebarInset, SidebarMenuButton, SidebarMenuSubButton, SidebarRail,
    SidebarTrigger,
};
use leptos::*;
use shell_ui::prelude::*;

/// Section identifier keys for the navigation tree.
type SectionId = &'static str;

fn nav_link(
    href: &'static str,
    label: &'static str,
    id: SectionId,
    active: RwSignal<SectionId>,
) -> SlotChild {
    SlotChild::Element(
        SlotElement::new(SlotTag::Anchor)
            .with_props(
                SlotProps::new()
                    .attr("href", href)
                    .on_click(Callback::new(move |_| active.set(id))),
            )
            .with_body(move || view! { <span data-ui-slot="label">{label}</span> }),
    )
}

#[component]
pub fn SiteApp() -> impl IntoView {
    view! {
        <LayoutProvider default_open=true tooltip_delay_ms=300>
            <AppSidebar />
            <SidebarInset>
                <PageHeader />
                <PageBody />
            </SidebarInset>
        </LayoutProvider>
    }
}

#[component]
fn AppSidebar() -> impl IntoView {
    let active = create_rw_signal::<SectionId>("home");

    view! {
        <Sidebar collapse=CollapseMode::Icon>
            <SidebarHeader>
                <span class="site-brand">"Fleet Console"</span>
                <SidebarInput placeholder="Filter sections" />
            </SidebarHeader>
            <SidebarContent>
                <SidebarGroup>
                    <SidebarGroupLabel>"Overview"</SidebarGroupLabel>
                    <SidebarGroupContent>
                        <SidebarMenu>
                            <SidebarMenuItem>
                                <SidebarMenuButton
                                    is_active=Signal::derive(move || active.get() == "home")
                                    tooltip="Home"
                                    as_child=nav_link("/", "Home", "home", active)
                                />
                            </SidebarMenuItem>
                        </SidebarMenu>
                    </SidebarGroupContent>
                </SidebarGroup>
                <SidebarSeparator />
                <SidebarGroup>
                    <SidebarGroupLabel>"Clusters"</SidebarGroupLabel>
                    <SidebarGroupContent>
                        <SidebarMenu>
                            <SidebarMenuItem>
                                <Collapsible default_open=true>
                                    <CollapsibleTrigger>
                                        "Workloads"
                                        <Icon icon=IconName::ChevronDown size=IconSize::Sm />
                                    </CollapsibleTrigger>
                                    <CollapsibleContent>
                                        <SidebarMenuSub>
                                            <SidebarMenuSubItem>
                                                <SidebarMenuSubButton
                                                    is_active=Signal::derive(move || active.get() == "helm")
                                                    as_child=nav_link("/clusters/helm", "Helm", "helm", active)
                                                />
                                            </SidebarMenuSubItem>
                                            <SidebarMenuSubItem>
                                                <SidebarMenuSubButton
                                                    is_active=Signal::derive(move || active.get() == "deployments")
                                                    as_child=nav_link(
                                                        "/clusters/deployments",
                                                        "Deployments",
                                                        "deployments",
                                                        active,
                                                    )
                                                />
                                            </SidebarMenuSubItem>
                                            <SidebarMenuSubItem>
                                                <SidebarMenuSubButton
                                                    is_active=Signal::derive(move || active.get() == "rke2")
                                                    as_child=nav_link("/clusters/rke2", "RKE2", "rke2", active)
                                                />
                                            </SidebarMenuSubItem>
                                        </SidebarMenuSub>
                                    </CollapsibleContent>
                                </Collapsible>
                            </SidebarMenuItem>
                        </SidebarMenu>
                    </SidebarGroupContent>
                </SidebarGroup>
                <SidebarGroup>
                    <SidebarGroupLabel>"Repositories"</SidebarGroupLabel>
                    <SidebarGroupContent>
                        <SidebarMenu>
                            <SidebarMenuItem>
                                <SidebarMenuButton
                                    is_active=Signal::derive(move || active.get() == "github")
                                    tooltip="Github"
                                    as_child=nav_link("/repositories/github", "Github", "github", active)
                                />
                                <SidebarMenuBadge>"12"</SidebarMenuBadge>
                            </SidebarMenuItem>
                            <SidebarMenuItem>
                                <SidebarMenuButton
                                    is_active=Signal::derive(move || active.get() == "docker")
                                    tooltip="Docker"
                                    as_child=nav_link("/repositories/docker", "Docker", "docker", active)
                                />
                            </SidebarMenuItem>
                        </SidebarMenu>
                    </SidebarGroupContent>
                </SidebarGroup>
            </SidebarContent>
            <SidebarFooter>
                <span class="site-footer-note">"v0.1.0"</span>
            </SidebarFooter>
        </Sidebar>
        <SidebarRail />
    }
}

#[component]
fn PageHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <SidebarTrigger />
            <Separator orientation=SeparatorOrientation::Vertical layout_class="site-header-rule" />
            <Breadcrumb>
                <BreadcrumbList>
                    <BreadcrumbItem>
                        <BreadcrumbLink href="/">"Home"</BreadcrumbLink>
                    </BreadcrumbItem>
                    <BreadcrumbSeparator />
                    <BreadcrumbItem>
                        <BreadcrumbEllipsis />
                    </BreadcrumbItem>
                    <BreadcrumbSeparator />
                    <BreadcrumbItem>
                        <BreadcrumbPage>"Dashboard"</BreadcrumbPage>
                    </BreadcrumbItem>
                </BreadcrumbList>
            </Breadcrumb>
        </header>
    }
}

#[component]
fn PageBody() -> impl IntoView {
    let loading = create_rw_signal(true);

    view! {
        <section class="site-content">
            <Show
                when=move || loading.get()
                fallback=|| view! { <p>"Dashboard content loaded."</p> }
            >
                <div class="site-loading" aria-busy="true">
                    <SidebarMenuSkeleton show_icon=true />
                    <SidebarMenuSkeleton show_icon=true text_width_percent=45 />
                    <Skeleton layout_class="site-card-skeleton" />
                </div>
            </Show>
            <button
                type="button"
                class="site-load-toggle"
                on:click=move |_| loading.update(|value| *value = !*value)
            >
                "Toggle loading state"
            </button>
        </section>
    }
}
