use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use whr_toolbox::{app, config, i18n, logging, report, whr};

/// 배가스 폐열 회수 타당성 계산기 (CLI)
#[derive(Parser)]
#[command(name = "whr_toolbox_cli", version)]
#[command(about = "Flue gas waste heat recovery feasibility calculator", long_about = None)]
struct Cli {
    /// UI 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,

    /// 로그 상세도 (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 분석 결과를 출력한다
    Analyze {
        #[command(flatten)]
        plant: PlantArgs,

        /// 결과를 JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// PDF 보고서를 저장한다
    Report {
        #[command(flatten)]
        plant: PlantArgs,

        /// 출력 파일 (기본: 설정의 report.output_path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 상담 창구에 질문한다
    Chat {
        /// 질문 내용
        message: Vec<String>,
    },
    /// 대화형 메뉴 (기본값)
    Interactive,
}

/// 운전 조건. 생략한 값은 config.toml의 `[defaults]`를 쓴다.
#[derive(Args)]
struct PlantArgs {
    /// 배가스 입구 온도 [°C]
    #[arg(long)]
    flue_temp_in: Option<f64>,
    /// 배가스 출구 온도 [°C]
    #[arg(long)]
    flue_temp_out: Option<f64>,
    /// 배가스 유량 [kg/hr]
    #[arg(long)]
    flow_rate: Option<f64>,
    /// 연료 (Coal, "Natural Gas", Bagasse, "Fuel Oil", Biomass)
    #[arg(long)]
    fuel_type: Option<String>,
    /// 연료 단가 [/kg]
    #[arg(long)]
    fuel_cost: Option<f64>,
    /// 연간 운전 시간 [hr]
    #[arg(long)]
    operating_hours: Option<f64>,
    /// 설치비
    #[arg(long)]
    installation_cost: Option<f64>,
    /// 현재 증기 수요 [kg/hr]
    #[arg(long)]
    steam_demand: Option<f64>,
}

impl PlantArgs {
    fn into_input(self, defaults: &whr::PlantInput) -> whr::PlantInput {
        whr::PlantInput {
            flue_temp_in: self.flue_temp_in.unwrap_or(defaults.flue_temp_in),
            flue_temp_out: self.flue_temp_out.unwrap_or(defaults.flue_temp_out),
            flow_rate: self.flow_rate.unwrap_or(defaults.flow_rate),
            fuel_type: self
                .fuel_type
                .map(whr::FuelSpec::from)
                .unwrap_or_else(|| defaults.fuel_type.clone()),
            fuel_cost: self.fuel_cost.unwrap_or(defaults.fuel_cost),
            operating_hours: self.operating_hours.unwrap_or(defaults.operating_hours),
            installation_cost: self.installation_cost.unwrap_or(defaults.installation_cost),
            steam_demand: self.steam_demand.or(defaults.steam_demand),
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 선택한 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

/// 검증 → 분석. 교차 필드 경고는 로그로만 남긴다.
fn validated_analysis(
    input: &whr::PlantInput,
) -> Result<whr::AnalysisResult, app::AppError> {
    whr::validate(input)?;
    for w in whr::cross_field_warnings(input) {
        warn!("{w}");
    }
    info!(
        fuel = %input.fuel_type,
        t_in = input.flue_temp_in,
        t_out = input.flue_temp_out,
        flow = input.flow_rate,
        "분석 실행"
    );
    Ok(whr::analyze(input))
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Analyze { plant, json } => {
            let input = plant.into_input(&cfg.defaults);
            let result = validated_analysis(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!(
                    "{}",
                    report::render_text(&input, &result, &cfg.report_options())
                );
            }
        }
        Commands::Report { plant, output } => {
            let input = plant.into_input(&cfg.defaults);
            let result = validated_analysis(&input)?;
            let path = output.unwrap_or_else(|| PathBuf::from(&cfg.report.output_path));
            report::write_report(&path, &input, &result, &cfg.report_options())?;
            println!("{}", path.display());
        }
        Commands::Chat { message } => {
            let client = app::chat_client(&cfg);
            println!("{}", client.reply(&message.join(" "))?);
        }
        Commands::Interactive => app::run(&mut cfg, &mut tr)?,
    }
    Ok(())
}
