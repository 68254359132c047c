//! hanread - 영문 표기를 한글 읽기 후보로 변환하는 CLI

use std::io::{self, BufRead};

use hanread::config::load_config;
use hanread::reading::Reader;

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();
    let reader = Reader::with_config(config);

    // 인자가 있으면 한 번 변환하고 종료
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        print_readings(&reader, &args.join(" "));
        return;
    }

    // 인자가 없으면 표준 입력을 줄 단위로 처리
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => print_readings(&reader, &line),
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        }
    }
}

/// 입력 하나의 읽기 후보를 한 줄에 하나씩 출력
fn print_readings(reader: &Reader, input: &str) {
    let readings = reader.read(input);
    log::debug!("'{}' -> 후보 {}개", input, readings.len());
    for reading in readings {
        println!("{}", reading);
    }
}
