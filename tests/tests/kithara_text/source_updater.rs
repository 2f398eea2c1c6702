#![forbid(unsafe_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use bytes::Bytes;
use kithara_text::{
    DoneCallback, NullSourceUpdater, SourceUpdater, TextTrackOptions,
    testing::RecordingLoaderFactory,
};
use rstest::rstest;

use crate::common::fixtures::{
    build_track, english_options, loader_factory, overlapping_segments, vtt_segment,
};

fn counting_done(counter: &Arc<AtomicUsize>) -> DoneCallback {
    let counter = Arc::clone(counter);
    Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

#[rstest]
#[case::empty(Vec::new())]
#[case::header_only(b"WEBVTT\n".to_vec())]
#[case::garbage(b"\x00\xff\xfe not vtt".to_vec())]
#[case::valid(vtt_segment(&[("00:01.000", "00:02.000", "x")]))]
fn append_completion_runs_exactly_once(
    #[case] payload: Vec<u8>,
    english_options: TextTrackOptions,
    loader_factory: RecordingLoaderFactory,
) {
    let (mut track, _) = build_track(english_options, &loader_factory);
    let calls = Arc::new(AtomicUsize::new(0));

    track
        .source_updater_mut()
        .append_buffer(Bytes::from(payload), counting_done(&calls));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!track.source_updater_mut().updating());
}

#[rstest]
fn buffered_reports_one_range_per_cue(
    english_options: TextTrackOptions,
    loader_factory: RecordingLoaderFactory,
) {
    let (mut track, _) = build_track(english_options, &loader_factory);
    for segment in overlapping_segments() {
        track.append_buffer(Bytes::from(segment));
    }

    let buffered = track.buffered();
    assert_eq!(buffered.len(), track.cue_count());
    assert_eq!(
        buffered.as_slice(),
        &[
            (1.0, 4.0),
            (8.0, 12.0),
            (13.0, 15.0),
            (19.5, 21.0),
            (25.0, 29.0)
        ]
    );
    assert_eq!(buffered.start(4), Some(25.0));
    assert_eq!(buffered.end(5), None);
}

#[rstest]
fn null_updater_honors_the_contract_behind_the_trait() {
    let mut updaters: Vec<Box<dyn SourceUpdater>> = vec![Box::new(NullSourceUpdater::new())];
    let calls = Arc::new(AtomicUsize::new(0));

    for updater in &mut updaters {
        updater.append_buffer(
            Bytes::from(vtt_segment(&[("00:01.000", "00:02.000", "x")])),
            counting_done(&calls),
        );
        updater.abort(counting_done(&calls));
        updater.duration(60.0);
        updater.remove(0.0, 10.0);
        assert_eq!(updater.timestamp_offset(Some(2.5)), 2.5);
        assert_eq!(updater.timestamp_offset(None), 2.5);
        assert!(updater.buffered().is_empty());
        assert!(!updater.updating());
        updater.dispose();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[rstest]
fn track_updater_is_a_plain_source_updater(
    english_options: TextTrackOptions,
    loader_factory: RecordingLoaderFactory,
) {
    let (mut track, _) = build_track(english_options, &loader_factory);
    let calls = Arc::new(AtomicUsize::new(0));
    {
        let updater: &mut dyn SourceUpdater = track.source_updater_mut();
        updater.append_buffer(
            Bytes::from(vtt_segment(&[("00:01.000", "00:02.000", "x")])),
            counting_done(&calls),
        );
        updater.abort(counting_done(&calls));
        updater.remove(0.0, 100.0);
        assert_eq!(updater.buffered().as_slice(), &[(1.0, 2.0)]);
    }

    // remove() is accepted but does not drop cues.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(track.cue_count(), 1);
}

#[rstest]
fn appends_after_dispose_still_complete(
    english_options: TextTrackOptions,
    loader_factory: RecordingLoaderFactory,
) {
    let (mut track, _) = build_track(english_options, &loader_factory);
    track.dispose();
    let calls = Arc::new(AtomicUsize::new(0));

    track.source_updater_mut().append_buffer(
        Bytes::from(vtt_segment(&[("00:01.000", "00:02.000", "late")])),
        counting_done(&calls),
    );

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(track.append_buffer(Bytes::from_static(b"WEBVTT\n")).is_none());
    assert!(track.buffered().is_empty());
}
