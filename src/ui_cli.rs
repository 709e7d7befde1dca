use std::io::{self, Write};
use std::path::Path;

use crate::app::{AppError, Session};
use crate::chat::ChatClient;
use crate::config::Config;
use crate::format::format_thousands;
use crate::i18n::{keys, Translator};
use crate::report;
use crate::whr::{self, FuelSpec, PlantInput, ScenarioResult};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Analysis,
    Scenarios,
    Report,
    Chat,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_ANALYSIS,
        keys::MAIN_MENU_SCENARIOS,
        keys::MAIN_MENU_REPORT,
        keys::MAIN_MENU_CHAT,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Analysis),
            "2" => return Ok(MenuChoice::Scenarios),
            "3" => return Ok(MenuChoice::Report),
            "4" => return Ok(MenuChoice::Chat),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 운전 조건을 입력받아 분석하고 결과를 출력한다.
pub fn handle_analysis(tr: &Translator, cfg: &Config, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ANALYSIS_HEADING));
    println!("{}", tr.t(keys::ANALYSIS_KEEP_DEFAULT));
    let d = session
        .last
        .as_ref()
        .map(|(input, _)| input.clone())
        .unwrap_or_else(|| cfg.defaults.clone());

    let input = PlantInput {
        flue_temp_in: read_f64_or(tr, keys::PROMPT_TEMP_IN, d.flue_temp_in)?,
        flue_temp_out: read_f64_or(tr, keys::PROMPT_TEMP_OUT, d.flue_temp_out)?,
        flow_rate: read_f64_or(tr, keys::PROMPT_FLOW_RATE, d.flow_rate)?,
        fuel_type: read_fuel_or(tr, &d.fuel_type)?,
        fuel_cost: read_f64_or(tr, keys::PROMPT_FUEL_COST, d.fuel_cost)?,
        operating_hours: read_f64_or(tr, keys::PROMPT_OPERATING_HOURS, d.operating_hours)?,
        installation_cost: read_f64_or(
            tr,
            keys::PROMPT_INSTALLATION_COST,
            d.installation_cost,
        )?,
        steam_demand: Some(read_f64_or(
            tr,
            keys::PROMPT_STEAM_DEMAND,
            d.steam_demand.unwrap_or(5000.0),
        )?),
    };

    if let Err(e) = whr::validate(&input) {
        println!("{}: {e}", tr.t(keys::ANALYSIS_INVALID_INPUT));
        return Ok(());
    }
    for w in whr::cross_field_warnings(&input) {
        println!("{}: {w}", tr.t(keys::ANALYSIS_NOTICE));
    }

    let result = whr::analyze(&input);
    println!();
    print!(
        "{}",
        report::render_text(&input, &result, &cfg.report_options())
    );
    session.last = Some((input, result));
    Ok(())
}

/// 마지막 분석의 세 시나리오와 5년 ROI를 표로 보여준다.
pub fn handle_scenarios(tr: &Translator, cfg: &Config, session: &Session) {
    let Some((_, result)) = session.last.as_ref() else {
        println!("{}", tr.t(keys::NO_ANALYSIS_YET));
        return;
    };
    println!("{}", tr.t(keys::SCENARIOS_HEADING));
    print!(
        "{}",
        scenario_table(tr, &result.scenarios, &cfg.currency_label)
    );

    println!("{}", tr.t(keys::ROI_HEADING));
    for (i, roi) in result.roi_5yr.iter().enumerate() {
        println!("  {} {}: {:>10.2} %", tr.t(keys::ROI_YEAR), i + 1, roi);
    }
}

/// 시나리오 비교표 문자열. 행은 지표, 열은 시나리오.
pub fn scenario_table(tr: &Translator, scenarios: &[ScenarioResult], currency: &str) -> String {
    type Getter = fn(&ScenarioResult) -> f64;
    let rows: [(&str, Getter, usize); 8] = [
        (keys::METRIC_EXIT_TEMP, |s: &ScenarioResult| s.flue_temp_out, 1),
        (keys::METRIC_CAPEX, |s: &ScenarioResult| s.installation_cost, 0),
        (keys::METRIC_HEAT, |s: &ScenarioResult| s.heat_recovered_kw, 2),
        (keys::METRIC_STEAM, |s: &ScenarioResult| s.steam_saved_kg_hr, 2),
        (keys::METRIC_SAVINGS, |s: &ScenarioResult| s.annual_savings, 2),
        (keys::METRIC_PAYBACK, |s: &ScenarioResult| s.payback_years, 2),
        (keys::METRIC_CO2, |s: &ScenarioResult| s.co2_reduction_tons, 2),
        (keys::METRIC_EFFICIENCY, |s: &ScenarioResult| s.efficiency_gain_pct, 2),
    ];

    let mut out = format!("{:<24}", tr.t(keys::SCENARIO_COL_METRIC));
    for s in scenarios {
        out.push_str(&format!("{:>18}", s.label.as_str()));
    }
    out.push('\n');
    for (key, get, decimals) in rows {
        let mut label = tr.t(key);
        if key == keys::METRIC_CAPEX || key == keys::METRIC_SAVINGS {
            label = format!("{label} [{currency}]");
        }
        out.push_str(&format!("{label:<24}"));
        for s in scenarios {
            out.push_str(&format!("{:>18}", format_thousands(get(s), decimals)));
        }
        out.push('\n');
    }
    out
}

/// 마지막 분석 결과로 PDF 보고서를 저장한다.
pub fn handle_report(tr: &Translator, cfg: &mut Config, session: &Session) -> Result<(), AppError> {
    let Some((input, result)) = session.last.as_ref() else {
        println!("{}", tr.t(keys::NO_ANALYSIS_YET));
        return Ok(());
    };
    println!("{}", tr.t(keys::REPORT_HEADING));
    let path = read_string_or(tr, keys::PROMPT_REPORT_PATH, &cfg.report.output_path)?;
    report::write_report(Path::new(&path), input, result, &cfg.report_options())?;
    cfg.report.output_path = path.clone();
    println!("{}: {path}", tr.t(keys::REPORT_SAVED));
    Ok(())
}

/// 빈 줄이 들어올 때까지 상담을 이어간다. 공급자 오류는 출력만 하고 계속한다.
pub fn handle_chat(tr: &Translator, chat: &ChatClient) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CHAT_HEADING));
    if !chat.has_credential() {
        println!("{}", tr.t(keys::CHAT_NO_KEY));
    }
    loop {
        let msg = read_line(&tr.t(keys::PROMPT_CHAT))?;
        if msg.trim().is_empty() {
            return Ok(());
        }
        match chat.reply(&msg) {
            Ok(answer) => println!("> {answer}\n"),
            Err(e) => println!("{}: {e}\n", tr.t(keys::ERROR_PREFIX)),
        }
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}: language={}, currency={}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        cfg.currency_label
    );
    cfg.language = read_string_or(tr, keys::SETTINGS_PROMPT_LANG, &cfg.language)?;
    cfg.currency_label = read_string_or(tr, keys::SETTINGS_PROMPT_CURRENCY, &cfg.currency_label)?;
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_string_or(tr: &Translator, key: &str, default: &str) -> Result<String, AppError> {
    let s = read_line(&format!("{} [{default}]: ", tr.t(key)))?;
    let s = s.trim();
    Ok(if s.is_empty() {
        default.to_string()
    } else {
        s.to_string()
    })
}

fn read_f64_or(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} [{default}]: ", tr.t(key)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.replace(',', "").parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_fuel_or(tr: &Translator, default: &FuelSpec) -> Result<FuelSpec, AppError> {
    let s = read_string_or(tr, keys::PROMPT_FUEL_TYPE, default.name())?;
    Ok(FuelSpec::from(s))
}
