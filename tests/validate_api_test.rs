//! Validation scenarios against the public API.

use pr_lint::classify::{DetectionSource, TemplateClassifier};
use pr_lint::diagnostic::IssueCode;
use pr_lint::rules::{default_rules, RuleSet, RulesFile};
use pr_lint::validate::Validator;

const FEATURE_BODY: &str = "\
# 새로운 기능 추가

## 개요
소셜 로그인(카카오, 구글)을 지원합니다.

## 변경 사항
- OAuth 콜백 엔드포인트 추가
- 사용자 테이블에 provider 컬럼 추가

## 테스트
- 콜백 처리 단위 테스트 추가

## 체크리스트
- [x] 셀프 리뷰를 완료했습니다
- [x] 관련 테스트를 추가/수정했습니다
";

const FIX_BODY: &str = "\
# 버그 수정

## 버그 내용
결제 금액이 소수점 첫째 자리에서 잘립니다.

## 원인
반올림 대신 정수 나눗셈을 사용했습니다.

## 해결 방법
금액 계산을 Decimal 타입으로 변경했습니다.

## 테스트
- 경계값 테스트 추가

## 체크리스트
- [x] 셀프 리뷰를 완료했습니다
- [ ] 재현 시나리오로 수정을 확인했습니다
";

fn rules_from(json: &str) -> RuleSet {
    let file: RulesFile = serde_json::from_str(json).unwrap();
    RuleSet::from_config(file).unwrap()
}

#[test]
fn well_formed_feature_pr_passes() {
    let rules = default_rules().unwrap();
    let result = Validator::new(&rules).validate(FEATURE_BODY, "feat(auth): 소셜 로그인 추가");

    assert!(result.valid, "{:?}", result.error_messages());
    assert_eq!(result.template.as_deref(), Some("feature"));
    assert!(result.warnings.is_empty());
}

#[test]
fn short_body_without_template_reports_both_problems() {
    let rules = rules_from(r#"{ "global_rules": { "min_body_length": 20 }, "templates": {} }"#);
    let result = Validator::new(&rules).validate("short", "");

    assert!(!result.valid);
    assert_eq!(result.template, None);
    let codes: Vec<_> = result.errors.iter().map(|d| d.code).collect();
    assert_eq!(codes, [IssueCode::BodyTooShort, IssueCode::TemplateUndetected]);
}

#[test]
fn backmerge_title_beats_feature_body() {
    let rules = default_rules().unwrap();
    let result = Validator::new(&rules).validate(FEATURE_BODY, "chore(backmerge): v1.2.3");

    assert_eq!(result.template.as_deref(), Some("release-backmerge"));
    assert_eq!(
        result.error_messages(),
        ["[백머지 정보] Required section is missing or empty."]
    );
}

#[test]
fn unchecked_box_is_reported() {
    let rules = default_rules().unwrap();
    let result = Validator::new(&rules).validate(FIX_BODY, "fix: 결제 금액 반올림 오류");

    assert!(!result.valid);
    assert_eq!(result.template.as_deref(), Some("fix"));
    assert_eq!(
        result.error_messages(),
        ["[체크리스트] Required checkbox not checked: 재현 시나리오로 수정을 확인했습니다"]
    );
}

#[test]
fn forbidden_word_warns_without_failing() {
    let rules = default_rules().unwrap();
    let body = format!("{}\n배포 전 문구 정리 필요 (WIP)\n", FEATURE_BODY);
    let result = Validator::new(&rules).validate(&body, "feat: 소셜 로그인");

    assert!(result.valid, "{:?}", result.error_messages());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].code, IssueCode::ForbiddenWord);
    assert!(result.warning_messages()[0].contains("WIP"));
}

#[test]
fn verdict_always_matches_errors() {
    let rules = default_rules().unwrap();
    let validator = Validator::new(&rules);
    let cases = [
        (FEATURE_BODY, "feat: x"),
        (FIX_BODY, "fix: y"),
        (FIX_BODY, ""),
        ("", ""),
        ("TODO", "hotfix: now"),
        (FEATURE_BODY, "style: nope"),
    ];
    for (body, title) in cases {
        let result = validator.validate(body, title);
        assert_eq!(result.valid, result.errors.is_empty(), "{title:?}");
    }
}

#[test]
fn title_detection_wins_regardless_of_body() {
    let classifier = TemplateClassifier::new();
    for body in [FEATURE_BODY, FIX_BODY, "# 릴리스 (Main)", ""] {
        let detection = classifier.detect("release: v3.0.0", body).unwrap();
        assert_eq!(detection.template, "release-main");
        assert_eq!(detection.source, DetectionSource::Title);
    }
}

#[test]
fn hotfix_beats_conventional_commit() {
    let classifier = TemplateClassifier::new();
    assert_eq!(
        classifier.detect_template("hotfix: 결제 장애", FIX_BODY).as_deref(),
        Some("hotfix-main")
    );
}

#[test]
fn validation_is_idempotent() {
    let rules = default_rules().unwrap();
    let validator = Validator::new(&rules);
    assert_eq!(
        validator.validate(FIX_BODY, "fix: 반올림"),
        validator.validate(FIX_BODY, "fix: 반올림")
    );
}

#[test]
fn comments_do_not_count_toward_length() {
    let rules = rules_from(
        r#"{ "templates": { "fix": {
            "required_sections": ["원인"],
            "validation_rules": { "원인": { "min_length": 10 } }
        } } }"#,
    );
    let validator = Validator::new(&rules);

    let padded = "## 원인\n<!-- 원인을 자세히 적어 주세요. 최소 열 글자 이상 -->\n짧음";
    let result = validator.validate(padded, "fix: x");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, IssueCode::SectionTooShort);

    let filled = "## 원인\n<!-- 원인을 적어 주세요 -->\n캐시 만료 시간이 잘못 설정되었습니다.";
    assert!(validator.validate(filled, "fix: x").valid);
}

#[test]
fn title_format_is_enforced_after_loose_detection() {
    let rules = default_rules().unwrap();
    // No space after the colon, so detection falls back to the body.
    let result = Validator::new(&rules).validate(FEATURE_BODY, "feat:소셜 로그인");

    assert_eq!(result.template.as_deref(), Some("feature"));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, IssueCode::TitleFormat);
}

#[test]
fn non_ascii_scope_falls_back_to_body_detection() {
    let classifier = TemplateClassifier::new();
    let detection = classifier.detect("feat(인증): 로그인 추가", FIX_BODY).unwrap();
    assert_eq!(detection.template, "fix");
    assert_eq!(detection.source, DetectionSource::Body);

    let rules = default_rules().unwrap();
    let result = Validator::new(&rules).validate(FIX_BODY, "feat(인증): 로그인 추가");
    assert_eq!(result.template.as_deref(), Some("fix"));
    assert!(result
        .errors
        .iter()
        .any(|e| e.code == IssueCode::TitleFormat));
}
