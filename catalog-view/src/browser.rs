//! Interactive material catalog browser built with eframe/egui.
//!
//! This module defines [`Browser`], which owns the loaded bundle and all
//! UI state (filter text, selection, last load error) and implements
//! [`eframe::App`] to render the catalog through an egui UI.

use catalog_core::{
    bundle::{Bundle, Material},
    filter, loader,
    types::MaterialIndex,
    value_fmt,
};
use eframe::App;
use egui_extras::{Column, TableBuilder};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Main application state for the catalog browser.
///
/// [`Browser`] glues together:
/// - The loaded data: [`Bundle`] from `catalog-core`.
/// - UI state (filter text, selection, last load error).
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Render the menu bar and status bar.
/// 2. Render the inspector panel for the selected material.
/// 3. Render the filterable materials table.
///
/// ### Fields
/// - `bundle` - Currently loaded bundle; replaced wholesale on (re)load.
/// - `source_path` - Path the bundle was requested from, for reloading.
/// - `selected` - Index of the selected material in the *unfiltered*
///   list, so a selection survives being hidden by the filter.
/// - `filter` - Live filter text matched against id, name, and tags.
/// - `last_error` - Message from the most recent failed load, if any.
pub struct Browser {
    bundle: Bundle,
    source_path: Option<PathBuf>,

    selected: Option<MaterialIndex>,
    filter: String,
    last_error: Option<String>,
}

impl Browser {
    /// Creates a new browser, optionally loading a bundle file.
    ///
    /// Starts with an empty catalog. When `path` is given it is remembered
    /// as the reload target and a load is attempted immediately; a failed
    /// startup load leaves the catalog empty and records the error.
    ///
    /// ### Parameters
    /// - `path` - Optional bundle file from the command line.
    ///
    /// ### Returns
    /// A fully-initialized [`Browser`] ready to be passed to
    /// `eframe::run_native`.
    pub fn new(path: Option<PathBuf>) -> Self {
        let mut browser = Self {
            bundle: Bundle::default(),
            source_path: None,
            selected: None,
            filter: String::new(),
            last_error: None,
        };

        if let Some(path) = path {
            browser.source_path = Some(path.clone());
            browser.load_from(&path);
        }
        browser
    }

    /// Loads a bundle file, replacing the current one on success.
    ///
    /// On success the bundle is swapped in wholesale, the first material
    /// (if any) is selected, and any previous error is cleared. On failure
    /// all prior state is kept and the error is recorded for the status
    /// bar and logged.
    fn load_from(&mut self, path: &Path) {
        match loader::load_bundle_from_path(path) {
            Ok(bundle) => {
                tracing::info!(
                    path = %path.display(),
                    materials = bundle.catalogs.materials.len(),
                    "loaded bundle"
                );
                self.selected = if bundle.catalogs.materials.is_empty() {
                    None
                } else {
                    Some(0)
                };
                self.bundle = bundle;
                self.last_error = None;
            }
            Err(err) => {
                let message = format!("{err:#}");
                tracing::error!("{message}");
                self.last_error = Some(message);
            }
        }
    }

    /// Re-runs the load on the remembered source path.
    ///
    /// Does nothing when the browser was started without a path.
    fn reload(&mut self) {
        if let Some(path) = self.source_path.clone() {
            self.load_from(&path);
        }
    }

    /// Returns the indices of materials passing the current filter,
    /// in catalog order.
    fn visible_rows(&self) -> Vec<MaterialIndex> {
        filter::filtered_indices(&self.bundle.catalogs.materials, &self.filter)
    }

    /// Returns the selected material, if the selection is valid.
    fn selected_material(&self) -> Option<&Material> {
        self.selected
            .and_then(|i| self.bundle.catalogs.materials.get(i))
    }

    /// Builds the top menu bar (File → Reload / Quit).
    fn ui_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let can_reload = self.source_path.is_some();
                    if ui
                        .add_enabled(can_reload, egui::Button::new("Reload"))
                        .clicked()
                    {
                        self.reload();
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    /// Builds the bottom status bar (counts, version, last error).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("version = {}", self.bundle.config_version));
                ui.separator();
                ui.label(format!(
                    "materials = {} / {}",
                    self.visible_rows().len(),
                    self.bundle.catalogs.materials.len()
                ));
                if let Some(error) = &self.last_error {
                    ui.separator();
                    ui.colored_label(ui.visuals().error_fg_color, error);
                }
            });
        });
    }

    /// Builds the right-hand inspector panel for the selected material.
    fn ui_inspector_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("inspector")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.heading("Inspector");
                ui.separator();

                let Some(material) = self.selected_material() else {
                    ui.weak("No material selected.");
                    return;
                };

                ui.label(format!("ID: {}", material.id));
                ui.label(format!("Name: {}", material.name));

                if !material.tags.is_empty() {
                    ui.separator();
                    ui.strong("Tags");
                    ui.horizontal_wrapped(|ui| {
                        for tag in &material.tags {
                            ui.weak(format!("[{tag}]"));
                        }
                    });
                }

                ui.separator();
                ui.strong("Properties");

                let properties = &material.properties;
                let empty_object = properties.as_object().is_some_and(|m| m.is_empty());
                if properties.is_null() || empty_object {
                    ui.weak("<empty>");
                } else {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        json_tree(ui, "properties", properties);
                    });
                }
            });
    }

    /// Builds the central materials panel: filter bar and table.
    fn ui_materials_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Materials");

            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.filter)
                        .hint_text("Filter by id/name/tag..."),
                );
                if ui.button("Clear").clicked() {
                    self.filter.clear();
                }
                ui.weak(format!("count: {}", self.bundle.catalogs.materials.len()));
            });

            ui.separator();

            let rows = self.visible_rows();
            let row_height = ui.text_style_height(&egui::TextStyle::Body) + 6.0;

            TableBuilder::new(ui)
                .striped(true)
                .sense(egui::Sense::click())
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::initial(180.0).resizable(true))
                .column(Column::initial(220.0).resizable(true))
                .column(Column::remainder())
                .header(row_height, |mut header| {
                    header.col(|ui| {
                        ui.strong("ID");
                    });
                    header.col(|ui| {
                        ui.strong("Name");
                    });
                    header.col(|ui| {
                        ui.strong("Tags");
                    });
                })
                .body(|mut body| {
                    for index in rows {
                        let material = &self.bundle.catalogs.materials[index];
                        body.row(row_height, |mut row| {
                            row.set_selected(self.selected == Some(index));
                            row.col(|ui| {
                                ui.monospace(&material.id);
                            });
                            row.col(|ui| {
                                ui.label(&material.name);
                            });
                            row.col(|ui| {
                                ui.label(material.tags.join(", "));
                            });
                            if row.response().clicked() {
                                self.selected = Some(index);
                            }
                        });
                    }
                });
        });
    }
}

/// Recursively renders a JSON value as a collapsible tree.
///
/// Objects and arrays become [`egui::CollapsingHeader`]s labeled with
/// their child count; scalars become plain labels. Child ids are salted
/// per key/index so repeated labels at different depths stay distinct.
fn json_tree(ui: &mut egui::Ui, label: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            egui::CollapsingHeader::new(value_fmt::node_text(label, value))
                .id_salt(label)
                .show(ui, |ui| {
                    for (key, child) in map {
                        ui.push_id(key, |ui| json_tree(ui, key, child));
                    }
                });
        }
        Value::Array(items) => {
            egui::CollapsingHeader::new(value_fmt::node_text(label, value))
                .id_salt(label)
                .show(ui, |ui| {
                    for (i, child) in items.iter().enumerate() {
                        ui.push_id(i, |ui| json_tree(ui, &i.to_string(), child));
                    }
                });
        }
        _ => {
            ui.label(value_fmt::node_text(label, value));
        }
    }
}

impl App for Browser {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// This method:
    /// - Renders the menu bar and status bar.
    /// - Renders the inspector side panel.
    /// - Renders the central materials table and filter bar.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_menu_bar(ctx);
        self.ui_status_bar(ctx);
        self.ui_inspector_panel(ctx);
        self.ui_materials_panel(ctx);
    }
}
