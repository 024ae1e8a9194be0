use chrono::{NaiveDate, NaiveDateTime};
use datetime_widget::{ClockUpdater, Document, FixedClock, FormatTemplate, MemoryDocument, WidgetError};

const THURSDAY_MARKUP: &str = r#"<div class="time">2:05:09<span class="ap">PM</span></div><div class="day">7</div><div class="monthday">March 2024<br>Thursday</div>"#;

fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn clock_updater(at: NaiveDateTime, elements: &[&str]) -> ClockUpdater<FixedClock, MemoryDocument> {
    ClockUpdater::new(
        FixedClock(at),
        MemoryDocument::with_elements(elements.iter().copied()),
        "clock",
        FormatTemplate::default(),
    )
}

#[tokio::test]
async fn test_fixed_instant_renders_exact_markup() -> anyhow::Result<()> {
    let updater = clock_updater(instant(2024, 3, 7, 14, 5, 9), &["clock"]);

    let markup = updater.update().await?;

    assert_eq!(markup, THURSDAY_MARKUP);
    assert_eq!(updater.document().inner_html("clock").await?, THURSDAY_MARKUP);
    Ok(())
}

#[tokio::test]
async fn test_midnight_and_noon() -> anyhow::Result<()> {
    let updater = clock_updater(instant(2024, 1, 1, 0, 0, 0), &["clock"]);

    let midnight = updater.update_at(instant(2024, 1, 1, 0, 0, 0)).await?;
    assert!(midnight.starts_with(r#"<div class="time">12:00:00<span class="ap">AM</span>"#));
    assert!(midnight.ends_with("January 2024<br>Monday</div>"));

    let noon = updater.update_at(instant(2024, 12, 25, 12, 30, 5)).await?;
    assert!(noon.starts_with(r#"<div class="time">12:30:05<span class="ap">PM</span>"#));
    assert!(noon.contains(r#"<div class="day">25</div>"#));
    Ok(())
}

#[tokio::test]
async fn test_consecutive_updates_do_not_accumulate() -> anyhow::Result<()> {
    let updater = clock_updater(instant(2024, 3, 7, 14, 5, 9), &["clock"]);

    updater.update_at(instant(2024, 3, 7, 14, 5, 9)).await?;
    let second = updater.update_at(instant(2024, 3, 8, 9, 0, 1)).await?;

    let content = updater.document().inner_html("clock").await?;
    assert_eq!(content, second);
    assert!(!content.contains("Thursday"));
    assert!(content.contains("9:00:01"));
    assert_eq!(content.matches(r#"<div class="time">"#).count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_absent_container_fails_and_writes_nothing() -> anyhow::Result<()> {
    let updater = clock_updater(instant(2024, 3, 7, 14, 5, 9), &["weather"]);

    let result = updater.update().await;

    assert!(matches!(
        result,
        Err(WidgetError::ElementNotFound { ref element_id }) if element_id == "clock"
    ));
    assert!(!updater.document().contains("clock").await);
    assert_eq!(updater.document().inner_html("weather").await?, "");
    Ok(())
}
