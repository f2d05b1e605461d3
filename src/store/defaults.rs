//! Embedded default data.
//!
//! These literals are the last stage of every resolution chain: when no
//! secret store and no local file can supply a list, the engine falls back
//! to the values below and keeps working.

use rust_decimal::Decimal;

use crate::models::{EmployeeRecord, ReferenceStore};

/// Category key for the project manager list.
pub const CATEGORY_PROJECT_MANAGERS: &str = "project_managers";

/// Category key for the destination list.
pub const CATEGORY_DESTINATIONS: &str = "destinations";

/// Categories every valid reference store must carry, each non-empty.
pub const REQUIRED_CATEGORIES: [&str; 2] = [CATEGORY_PROJECT_MANAGERS, CATEGORY_DESTINATIONS];

/// Default project manager names.
pub const DEFAULT_PROJECT_MANAGERS: [&str; 6] =
    ["이정석", "최태섭", "한영석", "김병모", "문성대", "김남현"];

/// Default trip destinations.
pub const DEFAULT_DESTINATIONS: [&str; 16] = [
    "고창", "서울", "부산", "인천", "울산", "여수", "목포", "포항", "통영", "제주", "완도",
    "군산", "보령", "태안", "안산", "화성",
];

/// Default research project names.
pub const DEFAULT_PROJECT_NAMES: [&str; 15] = [
    "내화물생산실 염에 의한 생태독성 증명 컨설팅",
    "해양생물종(윤충류)을 이용한 생태독성 시험 교차검증(분석용역)",
    "염인정 시설 운영 실태 조사",
    "첨단산업 배출수의 어장환경 생태 위해성 관리체계 구축 연구 I",
    "(재)한국화학융합시험연구원 Orthophosphoric acid (CAS No. 7664-38-2) 후발등록 컨설팅",
    "해양오염퇴적물 현장조사 및 분석용역",
    "2025 이차전지 폐수 처리수 방류수역 모니터링",
    "수질 및 수생태계 환경기준(안) 도출 연구(2025)",
    "2025년 폐수배출시설 생태독성관리 기술지원",
    "2025년 이차전지 폐수처리 기술지원",
    "통영항 오염퇴적물 정화사업 사업후 해양환경 모니터링(3년차)",
    "2025년 울산연안 및 광양만 특별관리해역 연안오염총량관리 도입 및 시행 연구",
    "후발등록자 국내참조권 제공 계약",
    "신규 신경독소 시험법 개발 및 실태조사 연구",
    "미세조류 분석자료 데이터베이스 구축",
];

/// Builds the default reference store.
pub fn reference_store() -> ReferenceStore {
    let mut store = ReferenceStore::new();
    store.insert_category(
        CATEGORY_PROJECT_MANAGERS,
        DEFAULT_PROJECT_MANAGERS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    store.insert_category(
        CATEGORY_DESTINATIONS,
        DEFAULT_DESTINATIONS.iter().map(|s| s.to_string()).collect(),
    );
    store
}

/// Builds the default project name list.
pub fn project_names() -> Vec<String> {
    DEFAULT_PROJECT_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Builds the default employee roster.
pub fn employee_roster() -> Vec<EmployeeRecord> {
    [
        ("이정석", "대표이사", 55000, 60000),
        ("한영석", "연구소장", 55000, 60000),
        ("김병모", "연구이사", 50000, 55000),
        ("문성대", "연구이사", 50000, 55000),
        ("최태섭", "이사", 55000, 60000),
        ("김민정", "부장", 45000, 50000),
        ("유인화", "차장", 45000, 50000),
        ("배지현", "과장", 40000, 45000),
        ("제갈수민", "수습", 40000, 45000),
        ("이정운", "과장", 40000, 45000),
    ]
    .into_iter()
    .map(|(name, position, daily, meal)| EmployeeRecord {
        name: name.to_string(),
        position: position.to_string(),
        daily_allowance: Decimal::from(daily),
        meal_allowance: Decimal::from(meal),
    })
    .collect()
}
