//! Remote file manager over the configured FTP servers.
//!
//! Navigation state lives in [`FtpBrowser`]; every directory change reloads
//! the listing from the backend.

use contracts::domain::common::{ListParams, RecordId};
use contracts::system::ftp::browser::{format_size, is_listing_current};
use contracts::system::ftp::{FtpBrowser, FtpConfig, FtpEntry, FtpListing};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::shared::config::PICKER_PAGE_SIZE;
use crate::shared::date_utils::format_datetime;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_SYSTEM};
use crate::shared::toast::use_toast;
use crate::system::ftp::api;

pub const FTP_BROWSER_TAB: &str = "sys_ftp_browser";

#[component]
pub fn FtpBrowserPage() -> impl IntoView {
    let toast = use_toast();
    let config_api = api::use_ftp_config_api();

    let configs = RwSignal::new(Vec::<FtpConfig>::new());
    let selected = RwSignal::new(String::new());
    let browser = RwSignal::new(FtpBrowser::default());
    let listing = RwSignal::new(FtpListing::default());
    let loading = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    let config_id = Memo::new(move |_| selected.with(|s| s.parse::<RecordId>().ok()));

    // Active servers for the selector; the first one is opened right away
    Effect::new(move |_| {
        let _revision = config_api.revision();
        let mut params = ListParams::default();
        params.set_page_size(PICKER_PAGE_SIZE);
        spawn_local(async move {
            match config_api.list(&params).await {
                Ok(page) => {
                    let active: Vec<FtpConfig> = page.items.into_iter().filter(|c| c.active).collect();
                    let first = active.first().map(|c| c.id.to_string());
                    configs.set(active);
                    if selected.get_untracked().is_empty() {
                        if let Some(first) = first {
                            selected.set(first);
                        }
                    }
                }
                Err(e) => error.set(Some(e)),
            }
        });
    });

    // A new server starts at its root path with an empty history
    Effect::new(move |_| {
        let Some(id) = config_id.get() else {
            return;
        };
        let root = configs.with_untracked(|list| {
            list.iter().find(|c| c.id == id).map(|c| c.root_path.clone())
        });
        browser.set(FtpBrowser::new(root.as_deref().unwrap_or("/")));
    });

    Effect::new(move |_| {
        let _ = reload.get();
        let Some(id) = config_id.get() else {
            return;
        };
        let path = browser.with(|b| b.current_dir().to_string());
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::list_files(id, &path).await;
            let current = browser.with_untracked(|b| {
                is_listing_current(id, &path, config_id.get_untracked(), b.current_dir())
            });
            if !current {
                log::debug!("dropping stale FTP listing of {}", path);
                return;
            }
            match result {
                Ok(result) => listing.set(result),
                Err(e) => {
                    listing.set(FtpListing::default());
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let refresh = move || reload.update(|n| *n += 1);

    let on_upload = move |ev: leptos::ev::Event| {
        let Some(id) = config_id.get_untracked() else {
            return;
        };
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(files) = input.files() else {
            return;
        };
        let files: Vec<web_sys::File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
        input.set_value("");
        if files.is_empty() {
            return;
        }
        let dir = browser.with_untracked(|b| b.current_dir().to_string());
        uploading.set(true);
        spawn_local(async move {
            for file in files {
                let name = file.name();
                match api::upload(id, &dir, file).await {
                    Ok(_) => toast.success(format!("\"{}\" subido", name)),
                    Err(e) => toast.error(format!("Error al subir \"{}\": {}", name, e)),
                }
            }
            uploading.set(false);
            refresh();
        });
    };

    let download = move |entry: FtpEntry| {
        let Some(id) = config_id.get_untracked() else {
            return;
        };
        let path = browser.with_untracked(|b| b.file_path(&entry.name));
        spawn_local(async move {
            if let Err(e) = api::download(id, &path, &entry.name).await {
                toast.error(format!("Error al descargar \"{}\": {}", entry.name, e));
            }
        });
    };

    let remove = move |entry: FtpEntry| {
        let Some(id) = config_id.get_untracked() else {
            return;
        };
        if !confirm(&format!("¿Eliminar \"{}\" del servidor?", entry.name)) {
            return;
        }
        let path = browser.with_untracked(|b| b.file_path(&entry.name));
        spawn_local(async move {
            match api::delete_file(id, &path).await {
                Ok(message) => {
                    toast.success(message);
                    refresh();
                }
                Err(e) => toast.error(format!("Error al eliminar \"{}\": {}", entry.name, e)),
            }
        });
    };

    let breadcrumbs = move || {
        browser
            .with(|b| b.breadcrumbs())
            .into_iter()
            .map(|crumb| {
                let path = crumb.path.clone();
                view! {
                    <button
                        class="ftp-browser__crumb"
                        on:click=move |_| browser.update(|b| b.navigate_to(&path))
                    >
                        {crumb.label}
                    </button>
                    <span class="ftp-browser__crumb-sep">"/"</span>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id=page_id(FTP_BROWSER_TAB, PAGE_CAT_SYSTEM) category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Archivos FTP"</h1>
                </div>
                <div class="page__header-right">
                    <Select value=selected size=SelectSize::Small>
                        <option value="" disabled=true>"— Servidor —"</option>
                        <For
                            each=move || configs.get()
                            key=|c| c.id
                            children=|c: FtpConfig| view! {
                                <option value=c.id.to_string()>{c.name.clone()}</option>
                            }
                        />
                    </Select>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| refresh()
                        disabled=Signal::derive(move || loading.get() || config_id.get().is_none())
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="ftp-browser__toolbar">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| { browser.update(|b| { b.back(); }); }
                        disabled=Signal::derive(move || !browser.with(|b| b.can_go_back()))
                    >
                        {icon("arrow-left")}
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| { browser.update(|b| { b.up(); }); }
                        disabled=Signal::derive(move || browser.with(|b| b.is_root()))
                    >
                        {icon("arrow-up")}
                    </Button>
                    <nav class="ftp-browser__breadcrumbs">{breadcrumbs}</nav>
                    <label
                        class="button button--primary ftp-browser__upload"
                        class:button--disabled=move || uploading.get() || config_id.get().is_none()
                    >
                        {icon("upload")}
                        {move || if uploading.get() { " Subiendo..." } else { " Subir archivos" }}
                        <input
                            type="file"
                            multiple=true
                            hidden=true
                            disabled=move || uploading.get() || config_id.get().is_none()
                            on:change=on_upload
                        />
                    </label>
                </div>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || config_id.get().is_none().then(|| view! {
                    <div class="page__placeholder">"Seleccione un servidor FTP."</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Tamaño"</TableHeaderCell>
                                <TableHeaderCell>"Modificado"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || listing.with(|l| l.entries.clone())
                                key=|entry| (entry.name.clone(), entry.is_dir)
                                children=move |entry: FtpEntry| {
                                    let name = entry.name.clone();
                                    let is_dir = entry.is_dir;
                                    let size = if is_dir { String::new() } else { format_size(entry.size) };
                                    let modified = entry.modified.as_deref().map(format_datetime).unwrap_or_default();
                                    let for_download = entry.clone();
                                    let for_delete = entry;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {if is_dir {
                                                        let dir = name.clone();
                                                        view! {
                                                            <button
                                                                class="ftp-browser__dir"
                                                                on:click=move |_| browser.update(|b| b.open_dir(&dir))
                                                            >
                                                                {icon("folder")}
                                                                {format!(" {}", name)}
                                                            </button>
                                                        }
                                                        .into_any()
                                                    } else {
                                                        view! { <span>{icon("file")}{format!(" {}", name)}</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--number">{size}</TableCell>
                                            <TableCell>{modified}</TableCell>
                                            <TableCell>
                                                {(!is_dir).then(|| view! {
                                                    <button
                                                        class="button button--subtle"
                                                        title="Descargar"
                                                        on:click=move |_| download(for_download.clone())
                                                    >
                                                        {icon("download")}
                                                    </button>
                                                    <button
                                                        class="button button--subtle"
                                                        title="Eliminar"
                                                        on:click=move |_| remove(for_delete.clone())
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                })}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
                {move || {
                    (!loading.get() && config_id.get().is_some() && listing.with(|l| l.entries.is_empty()))
                        .then(|| view! { <div class="page__placeholder">"Directorio vacío."</div> })
                }}
            </div>
        </PageFrame>
    }
}
