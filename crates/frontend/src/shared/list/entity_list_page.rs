use contracts::domain::common::{Entity, ListQuery};
use leptos::prelude::*;
use thaw::*;

use super::column::{CellKind, Column};
use super::controller::ListController;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::debounce::debounce_search;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

fn render_cell<E>(kind: CellKind<E>, item: &E) -> AnyView {
    match kind {
        CellKind::Text(value) => {
            let text = value(item);
            view! {
                <TableCell><TableCellLayout truncate=true>{text}</TableCellLayout></TableCell>
            }
            .into_any()
        }
        CellKind::Strong(value) => {
            let text = value(item);
            view! {
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span class="table__cell-strong">{text}</span>
                    </TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        CellKind::Badge(value) => {
            let (label, modifier) = value(item);
            view! {
                <TableCell>
                    <TableCellLayout>
                        <span class=format!("badge badge--{}", modifier)>{label}</span>
                    </TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        CellKind::Number(value) => {
            let text = value(item);
            view! {
                <TableCell class="table__cell--number">{text}</TableCell>
            }
            .into_any()
        }
    }
}

/// Standard list page of an entity: header with actions, search and
/// entity-specific filters, paginated table with row selection.
///
/// Clicking a row opens the record's detail tab; "Nuevo" opens an empty one.
#[component]
pub fn EntityListPage<E: Entity>(
    list: ListController<E>,
    columns: Vec<Column<E>>,
    /// Filter inputs beside the search box
    #[prop(optional, into)]
    filters: Option<ViewFn>,
    /// Extra header buttons
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    #[prop(optional)] search_placeholder: &'static str,
    /// Hide create/delete (read-mostly entities)
    #[prop(optional)]
    read_only: bool,
) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let search = RwSignal::new(
        list.filter
            .with_untracked(|f| f.list_params().search.clone().unwrap_or_default()),
    );
    let apply_search = move || list.set_search(&search.get_untracked());
    debounce_search(search, move |text| list.set_search(&text));

    let open_new = move || {
        tabs_store.open_tab(
            &E::detail_tab_key(None),
            &detail_tab_label(E::element_name(), "nuevo"),
        );
    };

    let columns = StoredValue::new(columns);
    let header_cells = columns
        .with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let title = col.title;
                    view! {
                        <TableHeaderCell resizable=false attr:style=format!("min-width: {}px;", col.min_width)>
                            {title}
                        </TableHeaderCell>
                    }
                })
                .collect_view()
        });

    let selected_count = move || list.selection.with(|s| s.len());
    let placeholder = if search_placeholder.is_empty() {
        "Buscar..."
    } else {
        search_placeholder
    };

    view! {
        <PageFrame page_id=page_id(&E::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{E::list_name()}</h1>
                    <Badge>{move || list.data.with(|d| d.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    {actions.map(|a| a.run())}
                    {(!read_only).then(|| view! {
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open_new()>
                            {icon("plus")}
                            " Nuevo"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| list.delete_selected()
                            disabled=Signal::derive(move || {
                                list.selection.with(|s| s.is_empty()) || list.deleting.get()
                            })
                        >
                            {icon("delete")}
                            {move || match selected_count() {
                                0 => " Eliminar".to_string(),
                                n => format!(" Eliminar ({})", n),
                            }}
                        </Button>
                    })}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.refresh()
                        disabled=Signal::derive(move || list.loading.get())
                    >
                        {icon("refresh")}
                        {move || if list.loading.get() { " Cargando..." } else { " Actualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel
                    is_expanded=list.filters_expanded
                    active_filters_count=list.active_filters()
                    on_clear=Callback::new(move |_| {
                        search.set(String::new());
                        list.reset_filters();
                    })
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || list.filter.with(|f| f.list_params().page))
                            total_pages=Signal::derive(move || list.data.with(|d| d.total_pages()))
                            total_count=Signal::derive(move || list.data.with(|d| d.total))
                            page_size=Signal::derive(move || list.filter.with(|f| f.list_params().page_size))
                            on_page_change=Callback::new(move |page| list.set_page(page))
                            on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                        />
                    }
                    .into_any()
                    filter_content=move || {
                        let extra = filters.clone();
                        view! {
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <div class="filter-panel__search">
                                    <Input value=search placeholder=placeholder />
                                </div>
                                <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                                    {icon("search")}
                                    " Buscar"
                                </Button>
                                {extra.map(|f| f.run())}
                            </Flex>
                        }
                        .into_any()
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {(!read_only).then(|| view! {
                                    <TableHeaderCheckbox visible_ids=list.visible_ids() selection=list.selection />
                                })}
                                {header_cells}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.data.with(|d| d.items.clone())
                                key=|item| item.id()
                                children=move |item: E| {
                                    let id = item.id();
                                    let title = detail_tab_label(E::element_name(), &item.display_name());
                                    let cells = columns.with_value(|cols| {
                                        cols.iter().map(|col| render_cell(col.kind, &item)).collect_view()
                                    });
                                    view! {
                                        <TableRow
                                            class="table__row--clickable"
                                            on:click=move |_| tabs_store.open_tab(&E::detail_tab_key(Some(id)), &title)
                                        >
                                            {(!read_only).then(|| view! {
                                                <TableCellCheckbox item_id=id selection=list.selection />
                                            })}
                                            {cells}
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !list.loading.get() && list.data.with(|d| d.items.is_empty())>
                        <div class="table__empty">"No hay registros"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
