#![forbid(unsafe_code)]

use std::sync::Arc;

use kithara_events::{Event, EventBus, TextEvent};
use kithara_text::{
    HlsContext, HlsTextTrack, TextError, TextTrackOptions, TrackKind,
    testing::RecordingLoaderFactory,
};
use rstest::rstest;
use url::Url;

use crate::common::fixtures::{
    EN_PLAYLIST, build_track, english_options, loader_factory, tracing_setup, vtt_segment,
};

fn drain(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<TextEvent> {
    std::iter::from_fn(|| rx.try_recv().ok())
        .filter_map(|e| e.as_text().cloned())
        .collect()
}

#[rstest]
fn default_rendition_metadata(
    english_options: TextTrackOptions,
    loader_factory: RecordingLoaderFactory,
) {
    let (track, log) = build_track(english_options, &loader_factory);

    assert_eq!(track.kind(), TrackKind::Main);
    assert!(track.enabled());
    assert!(track.autoselect());
    assert_eq!(track.language().as_deref(), Some("en"));
    assert_eq!(track.label().as_deref(), Some("English"));
    assert_eq!(track.src(), "English");
    assert_eq!(track.media_groups(), vec!["subs".to_string()]);
    assert_eq!(track.get_loader("subs").map(|l| l.uri().as_str()), Some(EN_PLAYLIST));
    assert_eq!(log.created_count(), 1);
}

#[rstest]
fn alternative_rendition_without_playlist(loader_factory: RecordingLoaderFactory) {
    let (track, log) = build_track(TextTrackOptions::new("cc"), &loader_factory);

    assert_eq!(track.kind(), TrackKind::Alternative);
    assert!(!track.enabled());
    assert_eq!(track.src(), "cc");
    assert!(track.get_loader("cc").is_none());
    assert_eq!(track.media_groups(), vec!["cc".to_string()]);
    assert_eq!(log.created_count(), 0);
}

#[rstest]
fn switching_groups_disposes_previous_loader(
    english_options: TextTrackOptions,
    loader_factory: RecordingLoaderFactory,
) {
    let (mut track, log) = build_track(english_options, &loader_factory);

    track
        .add_loader_str("subs-hd", Some("https://cdn.example.com/subs/en-hd.m3u8"))
        .unwrap();
    assert!(track.remove_loader("subs"));
    assert!(!track.remove_loader("subs"));

    assert_eq!(log.disposed_times(EN_PLAYLIST), 1);
    assert_eq!(track.media_groups(), vec!["subs-hd".to_string()]);
    assert!(track.get_loader("subs-hd").is_some());
}

#[rstest]
fn empty_uri_means_no_loader(
    english_options: TextTrackOptions,
    loader_factory: RecordingLoaderFactory,
) {
    let (mut track, log) = build_track(english_options, &loader_factory);

    track.add_loader_str("muxed", Some("")).unwrap();

    assert!(track.get_loader("muxed").is_none());
    assert_eq!(track.media_groups(), vec!["subs".to_string(), "muxed".to_string()]);
    assert_eq!(log.created_count(), 1);
}

#[rstest]
fn invalid_uri_is_rejected(
    english_options: TextTrackOptions,
    loader_factory: RecordingLoaderFactory,
) {
    let (mut track, _) = build_track(english_options, &loader_factory);

    let err = track.add_loader_str("broken", Some("not a url")).unwrap_err();

    assert!(matches!(err, TextError::InvalidUrl(_)));
    assert_eq!(track.media_groups(), vec!["subs".to_string()]);
}

#[rstest]
fn dispose_releases_every_loader_once(
    _tracing_setup: (),
    english_options: TextTrackOptions,
    loader_factory: RecordingLoaderFactory,
) {
    let (mut track, log) = build_track(english_options, &loader_factory);
    track
        .add_loader_str("fr", Some("https://cdn.example.com/subs/fr.m3u8"))
        .unwrap();
    track.add_loader("forced", None).unwrap();

    track.dispose();
    track.dispose();
    drop(track);

    assert_eq!(log.created_count(), 2);
    assert_eq!(log.disposed_count(), 2);
    assert_eq!(log.disposed_times(EN_PLAYLIST), 1);
}

#[rstest]
fn disposed_track_refuses_new_loaders(
    english_options: TextTrackOptions,
    loader_factory: RecordingLoaderFactory,
) {
    let (mut track, log) = build_track(english_options, &loader_factory);
    track.dispose();

    let err = track
        .add_loader_str("late", Some("https://cdn.example.com/late.m3u8"))
        .unwrap_err();

    assert!(matches!(err, TextError::Disposed));
    assert!(track.is_disposed());
    assert_eq!(log.created_count(), 1);
}

#[rstest]
fn context_bus_is_used_when_options_have_none(loader_factory: RecordingLoaderFactory) {
    let bus = EventBus::new(16);
    let mut rx = bus.subscribe();

    let track = HlsTextTrack::new(
        TextTrackOptions::new("subs").with_label("Deutsch"),
        Arc::new(loader_factory),
        HlsContext::new(bus),
    )
    .unwrap();
    drop(track);

    assert_eq!(
        drain(&mut rx),
        vec![
            TextEvent::LoaderAdded {
                track: "Deutsch".into(),
                media_group: "subs".into(),
                has_loader: false,
            },
            TextEvent::Disposed {
                track: "Deutsch".into(),
            },
        ]
    );
}

#[rstest]
fn full_lifecycle_event_sequence(loader_factory: RecordingLoaderFactory) {
    let bus = EventBus::new(32);
    let mut rx = bus.subscribe();
    let options = TextTrackOptions::new("subs")
        .with_resolved_uri(Url::parse(EN_PLAYLIST).unwrap())
        .with_label("English")
        .with_events(bus.clone());

    let (mut track, _) = build_track(options, &loader_factory);
    track.ingest_payload(&vtt_segment(&[("00:01.000", "00:02.000", "hi")]));
    track.remove_loader("subs");
    track.dispose();

    assert_eq!(
        drain(&mut rx),
        vec![
            TextEvent::LoaderAdded {
                track: "English".into(),
                media_group: "subs".into(),
                has_loader: true,
            },
            TextEvent::LoadedData {
                track: "English".into(),
                added: 1,
                total: 1,
            },
            TextEvent::LoaderRemoved {
                track: "English".into(),
                media_group: "subs".into(),
            },
            TextEvent::Disposed {
                track: "English".into(),
            },
        ]
    );
}
