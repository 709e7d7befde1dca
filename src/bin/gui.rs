#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::sync::mpsc::{self, Receiver};
use std::{env, fs, path::Path, thread};
use tracing::{error, info};
use whr_toolbox::{
    app, chat, config,
    format::format_thousands,
    i18n, logging, report,
    whr::{self, AnalysisResult, FuelSpec, FuelType, PlantInput, ScenarioResult},
};

fn main() -> Result<(), eframe::Error> {
    logging::init(0);

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        error!("설정 로드 실패, 기본값 사용: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Waste Heat Recovery Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                info!("한글 폰트 없음, 기본 폰트 사용: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["WHR.png", "icon.png", "assets/icon.png", "../WHR.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾는다. assets/fonts → Windows 시스템 폰트 순.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc", "batang.ttc"] {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }
    Err("Korean font not found".into())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 지표 카드 하나. 제목 아래 큰 글씨로 값을 보여준다.
fn metric_card(ui: &mut egui::Ui, title: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(170.0);
        ui.vertical(|ui| {
            ui.small(title);
            ui.label(egui::RichText::new(value).size(20.0).strong());
        });
    });
}

const WARN_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 40, 40);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Input,
    Dashboard,
    Scenarios,
    Summary,
    Chat,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    tab: Tab,
    lang_input: String,
    show_settings_modal: bool,
    settings_status: Option<String>,
    // 입력
    input: PlantInput,
    fuel_name: String,
    steam_demand: f64,
    input_error: Option<String>,
    input_warnings: Vec<String>,
    // 결과
    last: Option<(PlantInput, AnalysisResult)>,
    report_status: Option<String>,
    // 상담
    chat: chat::ChatClient,
    chat_input: String,
    chat_log: Vec<(String, String)>,
    chat_pending: Option<Receiver<Result<String, chat::ChatError>>>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let input = config.defaults.clone();
        Self {
            tab: Tab::Input,
            lang_input: config.language.clone(),
            show_settings_modal: false,
            settings_status: None,
            fuel_name: input.fuel_type.name().to_string(),
            steam_demand: input.steam_demand.unwrap_or(5000.0),
            input,
            input_error: None,
            input_warnings: Vec::new(),
            last: None,
            report_status: None,
            chat: app::chat_client(&config),
            chat_input: String::new(),
            chat_log: Vec::new(),
            chat_pending: None,
            tr,
            config,
        }
    }

    fn run_analysis(&mut self) {
        let mut input = self.input.clone();
        input.fuel_type = FuelSpec::from(self.fuel_name.clone());
        input.steam_demand = Some(self.steam_demand);
        if let Err(e) = whr::validate(&input) {
            self.input_error = Some(e.to_string());
            return;
        }
        self.input_error = None;
        self.input_warnings = whr::cross_field_warnings(&input);
        let result = whr::analyze(&input);
        info!(
            heat_kw = result.heat_recovered_kw,
            payback = result.payback_years,
            "GUI 분석 완료"
        );
        self.last = Some((input, result));
        self.report_status = None;
        self.tab = Tab::Dashboard;
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Input, txt("gui.tab.input", "Plant Input")),
            (Tab::Dashboard, txt("gui.tab.dashboard", "Dashboard")),
            (Tab::Scenarios, txt("gui.tab.scenarios", "Scenarios")),
            (Tab::Summary, txt("gui.tab.summary", "Summary & Report")),
            (Tab::Chat, txt("gui.tab.chat", "Assistant")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_input(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        heading_with_tip(
            ui,
            &txt("gui.input.heading", "Plant Operating Data"),
            &txt(
                "gui.input.heading_tip",
                "Enter the boiler flue gas conditions and economics.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("input_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    let rows: [(&str, &str, &str, &mut f64, f64, &str); 7] = [
                        (
                            "gui.input.temp_in",
                            "Flue gas inlet temperature",
                            "Between 50 and 800 °C",
                            &mut self.input.flue_temp_in,
                            1.0,
                            "°C",
                        ),
                        (
                            "gui.input.temp_out",
                            "Flue gas outlet temperature",
                            "Between 30 and 600 °C, keep above 120 °C",
                            &mut self.input.flue_temp_out,
                            1.0,
                            "°C",
                        ),
                        (
                            "gui.input.flow",
                            "Flue gas flow rate",
                            "Mass flow, up to 500,000 kg/hr",
                            &mut self.input.flow_rate,
                            100.0,
                            "kg/hr",
                        ),
                        (
                            "gui.input.fuel_cost",
                            "Fuel cost",
                            "Price per kg of fuel",
                            &mut self.input.fuel_cost,
                            0.01,
                            "/kg",
                        ),
                        (
                            "gui.input.hours",
                            "Operating hours",
                            "Annual hours, at most 8760",
                            &mut self.input.operating_hours,
                            10.0,
                            "hr/yr",
                        ),
                        (
                            "gui.input.capex",
                            "Installation cost",
                            "Capital cost of the recovery equipment",
                            &mut self.input.installation_cost,
                            1000.0,
                            self.config.currency_label.as_str(),
                        ),
                        (
                            "gui.input.steam_demand",
                            "Current steam demand",
                            "Used only to show how much of the demand is covered",
                            &mut self.steam_demand,
                            10.0,
                            "kg/hr",
                        ),
                    ];
                    for (key, default, tip, value, speed, unit) in rows {
                        label_with_tip(ui, &txt(key, default), tip);
                        ui.add(egui::DragValue::new(value).speed(speed));
                        ui.label(unit);
                        ui.end_row();
                    }

                    label_with_tip(
                        ui,
                        &txt("gui.input.fuel", "Fuel type"),
                        &txt("gui.input.fuel_tip", "Determines the CO2 emission factor"),
                    );
                    egui::ComboBox::from_id_source("fuel_type")
                        .selected_text(self.fuel_name.clone())
                        .show_ui(ui, |ui| {
                            for fuel in FuelType::ALL {
                                ui.selectable_value(
                                    &mut self.fuel_name,
                                    fuel.as_str().to_string(),
                                    fuel.as_str(),
                                );
                            }
                        });
                    ui.label("");
                    ui.end_row();
                });
        });
        ui.add_space(8.0);
        if ui
            .button(txt("gui.input.run", "Analyze"))
            .clicked()
        {
            self.run_analysis();
        }
        if let Some(err) = &self.input_error {
            ui.colored_label(WARN_COLOR, format!("{}: {err}", txt("gui.input.invalid", "Invalid input")));
        }
        for w in &self.input_warnings {
            ui.label(format!("• {w}"));
        }
    }

    fn ui_dashboard(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let Some((input, res)) = &self.last else {
            ui.label(txt("gui.no_result", "Run an analysis first."));
            return;
        };
        let currency = &self.config.currency_label;
        ui.heading(txt("gui.dashboard.heading", "Key Results"));
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            metric_card(
                ui,
                &txt("gui.dashboard.heat", "Heat recovered"),
                format!("{} kW", format_thousands(res.heat_recovered_kw, 2)),
            );
            metric_card(
                ui,
                &txt("gui.dashboard.steam", "Steam generated"),
                format!("{} kg/hr", format_thousands(res.steam_saved_kg_hr, 2)),
            );
            metric_card(
                ui,
                &txt("gui.dashboard.savings", "Annual savings"),
                format!("{currency} {}", format_thousands(res.annual_savings, 2)),
            );
            metric_card(
                ui,
                &txt("gui.dashboard.payback", "Payback"),
                format!("{:.2} yr", res.payback_years),
            );
            metric_card(
                ui,
                &txt("gui.dashboard.co2", "CO2 reduction"),
                format!("{} t/yr", format_thousands(res.co2_reduction_tons, 2)),
            );
            metric_card(
                ui,
                &txt("gui.dashboard.efficiency", "Efficiency gain"),
                format!("{:.2} %", res.efficiency_gain_pct),
            );
        });

        ui.add_space(12.0);
        ui.label(txt("gui.dashboard.energy", "Energy in flue gas"));
        ui.add(
            egui::ProgressBar::new((res.energy.energy_recovered_pct / 100.0).clamp(0.0, 1.0) as f32)
                .text(format!(
                    "{:.2} % recovered / {:.2} % lost",
                    res.energy.energy_recovered_pct, res.energy.energy_lost_pct
                )),
        );
        if let Some(cov) = res.steam_demand_coverage_pct {
            ui.label(format!(
                "{}: {cov:.2} % of {} kg/hr",
                txt("gui.dashboard.coverage", "Steam demand covered"),
                format_thousands(input.steam_demand.unwrap_or_default(), 0)
            ));
        }

        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            let rec = &res.recommendation;
            ui.strong(txt("gui.dashboard.recommendation", "Recommended equipment"));
            egui::Grid::new("rec_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.dashboard.exchanger", "Heat exchanger"));
                    ui.label(rec.heat_exchanger_type.as_str());
                    ui.end_row();
                    ui.label(txt("gui.dashboard.optimal_exit", "Optimal exit temperature"));
                    ui.label(format!("{:.1} °C", rec.optimal_exit_temp));
                    ui.end_row();
                    ui.label(txt("gui.dashboard.improvement", "Improvement"));
                    ui.label(&rec.efficiency_improvement);
                    ui.end_row();
                });
            if let Some(msg) = &rec.warning_message {
                ui.colored_label(WARN_COLOR, msg);
            }
        });

        ui.add_space(12.0);
        ui.strong(txt("gui.dashboard.roi", "Cumulative ROI (5 years)"));
        egui::Grid::new("roi_grid")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for (i, roi) in res.roi_5yr.iter().enumerate() {
                    ui.label(format!("{} {}", txt("gui.dashboard.year", "Year"), i + 1));
                    let text = format!("{roi:.2} %");
                    if *roi < 0.0 {
                        ui.colored_label(WARN_COLOR, text);
                    } else {
                        ui.label(text);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        let climate = &res.climate_impact;
        ui.strong(txt("gui.dashboard.climate", "Climate impact over 5 years"));
        ui.label(format!(
            "{} t CO2 ≈ {} trees ≈ {} cars",
            format_thousands(climate.total_co2_avoided_tons, 2),
            format_thousands(climate.equivalent_trees_planted as f64, 0),
            format_thousands(climate.equivalent_cars_removed as f64, 0),
        ));
    }

    fn ui_scenarios(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let Some((_, res)) = &self.last else {
            ui.label(txt("gui.no_result", "Run an analysis first."));
            return;
        };
        ui.heading(txt("gui.scenarios.heading", "Scenario Comparison"));
        ui.add_space(8.0);
        type Getter = fn(&ScenarioResult) -> String;
        let rows: [(String, Getter); 8] = [
            (txt("gui.scenarios.exit", "Exit temperature [°C]"), |s: &ScenarioResult| {
                format!("{:.1}", s.flue_temp_out)
            }),
            (txt("gui.scenarios.capex", "Installation cost"), |s: &ScenarioResult| {
                format_thousands(s.installation_cost, 0)
            }),
            (txt("gui.scenarios.heat", "Heat recovered [kW]"), |s: &ScenarioResult| {
                format_thousands(s.heat_recovered_kw, 2)
            }),
            (txt("gui.scenarios.steam", "Steam [kg/hr]"), |s: &ScenarioResult| {
                format_thousands(s.steam_saved_kg_hr, 2)
            }),
            (txt("gui.scenarios.savings", "Annual savings"), |s: &ScenarioResult| {
                format_thousands(s.annual_savings, 2)
            }),
            (txt("gui.scenarios.payback", "Payback [yr]"), |s: &ScenarioResult| {
                format!("{:.2}", s.payback_years)
            }),
            (txt("gui.scenarios.co2", "CO2 reduction [t/yr]"), |s: &ScenarioResult| {
                format_thousands(s.co2_reduction_tons, 2)
            }),
            (txt("gui.scenarios.efficiency", "Efficiency gain [%]"), |s: &ScenarioResult| {
                format!("{:.2}", s.efficiency_gain_pct)
            }),
        ];
        egui::Grid::new("scenario_grid")
            .num_columns(4)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.strong(txt("gui.scenarios.metric", "Metric"));
                for s in &res.scenarios {
                    ui.strong(s.label.as_str());
                }
                ui.end_row();
                for (label, get) in &rows {
                    ui.label(label);
                    for s in &res.scenarios {
                        ui.label(get(s));
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_summary(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let Some((input, res)) = &self.last else {
            ui.label(txt("gui.no_result", "Run an analysis first."));
            return;
        };
        ui.heading(txt("gui.summary.heading", "Executive Summary"));
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(&res.ai_summary);
        });
        ui.add_space(12.0);
        if ui
            .button(txt("gui.summary.save_pdf", "Save PDF report"))
            .clicked()
        {
            let picked = FileDialog::new()
                .add_filter("PDF", &["pdf"])
                .set_file_name(&self.config.report.output_path)
                .save_file();
            if let Some(path) = picked {
                self.report_status = Some(
                    match report::write_report(&path, input, res, &self.config.report_options()) {
                        Ok(()) => format!("{}: {}", txt("gui.summary.saved", "Saved"), path.display()),
                        Err(e) => format!("{}: {e}", txt("gui.summary.save_error", "Save error")),
                    },
                );
            }
        }
        if let Some(msg) = &self.report_status {
            ui.label(msg);
        }
    }

    fn poll_chat(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.chat_pending else {
            return;
        };
        match rx.try_recv() {
            Ok(reply) => {
                let text = reply.unwrap_or_else(|e| format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)));
                if let Some(last) = self.chat_log.last_mut() {
                    last.1 = text;
                }
                self.chat_pending = None;
            }
            Err(mpsc::TryRecvError::Empty) => ctx.request_repaint(),
            Err(mpsc::TryRecvError::Disconnected) => self.chat_pending = None,
        }
    }

    fn ui_chat(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        ui.heading(txt("gui.chat.heading", "Energy Assistant"));
        if !self.chat.has_credential() {
            ui.small(txt(
                "gui.chat.no_key",
                "No API key configured. Built-in answers only.",
            ));
        }
        ui.add_space(8.0);
        for (question, answer) in &self.chat_log {
            ui.label(egui::RichText::new(format!("Q: {question}")).strong());
            if answer.is_empty() {
                ui.spinner();
            } else {
                ui.label(answer);
            }
            ui.add_space(6.0);
        }
        ui.separator();
        let busy = self.chat_pending.is_some();
        ui.horizontal(|ui| {
            let edit = ui.add_enabled(
                !busy,
                egui::TextEdit::singleline(&mut self.chat_input).desired_width(480.0),
            );
            let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let send = ui
                .add_enabled(!busy, egui::Button::new(txt("gui.chat.send", "Send")))
                .clicked();
            if (enter || send) && !self.chat_input.trim().is_empty() {
                let message = std::mem::take(&mut self.chat_input);
                self.chat_log.push((message.clone(), String::new()));
                let client = self.chat.clone();
                let (tx, rx) = mpsc::channel();
                thread::spawn(move || {
                    let _ = tx.send(client.reply(&message));
                });
                self.chat_pending = Some(rx);
            }
        });
    }

    fn ui_settings_modal(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let mut open = self.show_settings_modal;
        egui::Window::new(txt("gui.settings.title", "Program Settings"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(txt("gui.settings.lang", "Language"));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.lang_input,
                            "auto".into(),
                            txt("gui.settings.lang.auto", "System"),
                        );
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                    });
                ui.separator();
                ui.label(txt("gui.settings.currency", "Currency label"));
                ui.text_edit_singleline(&mut self.config.currency_label);
                ui.separator();
                if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                    self.config.language = self.lang_input.clone();
                    self.config.defaults = PlantInput {
                        fuel_type: FuelSpec::from(self.fuel_name.clone()),
                        steam_demand: Some(self.steam_demand),
                        ..self.input.clone()
                    };
                    let resolved = i18n::resolve_language(&self.config.language, None);
                    self.tr = i18n::Translator::new_with_pack(
                        &resolved,
                        self.config.language_pack_dir.as_deref(),
                    );
                    self.settings_status = Some(match self.config.save() {
                        Ok(()) => txt("gui.settings.saved", "Saved."),
                        Err(e) => format!("Save error: {e}"),
                    });
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_chat(ctx);
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.text(key, default);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Waste Heat Recovery Toolbox"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings_modal(ctx);
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Input => self.ui_input(ui),
                    Tab::Dashboard => self.ui_dashboard(ui),
                    Tab::Scenarios => self.ui_scenarios(ui),
                    Tab::Summary => self.ui_summary(ui),
                    Tab::Chat => self.ui_chat(ui),
                });
        });
    }
}
