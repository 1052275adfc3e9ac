//! Streaming scenarios over asynchronous readers fed in arbitrary chunks.

use sse::{EventCollector, ServerSentEvent, StreamEnd, parse_async};
use tokio::io::{AsyncWriteExt, BufReader, duplex};

async fn parse_chunks(chunks: &[&'static str]) -> (StreamEnd, EventCollector) {
    let (mut writer, reader) = duplex(16);
    let chunks = chunks.to_vec();

    let feeder = tokio::spawn(async move {
        for chunk in chunks {
            if writer.write_all(chunk.as_bytes()).await.is_err() {
                // reader stopped early after the end-of-stream marker
                return;
            }
        }
    });

    let mut collector = EventCollector::default();
    let end = parse_async(BufReader::new(reader), &mut collector)
        .await
        .unwrap();
    feeder.await.unwrap();

    (end, collector)
}

#[tokio::test]
async fn test_events_split_across_chunks() {
    let (end, collector) = parse_chunks(&[
        "da",
        "ta: {\"result\":\"Hel",
        "lo\"}\n",
        "\ndata: {\"result\":\" world\"}\n\n",
        "data: [DO",
        "NE]\n\n",
    ])
    .await;

    assert_eq!(end, StreamEnd::Done);
    assert!(collector.closed);
    assert_eq!(
        collector.events,
        vec![
            ServerSentEvent::new("{\"result\":\"Hello\"}"),
            ServerSentEvent::new("{\"result\":\" world\"}"),
        ]
    );
}

#[tokio::test]
async fn test_stream_without_done_marker() {
    let (end, collector) = parse_chunks(&["data: a\n\n", "data: b\n", "data: c"]).await;

    assert_eq!(end, StreamEnd::Eof);
    assert!(collector.closed);
    assert_eq!(
        collector.events,
        vec![ServerSentEvent::new("a"), ServerSentEvent::new("b\nc")]
    );
}

#[tokio::test]
async fn test_error_body_without_prefix() {
    let (end, collector) =
        parse_chunks(&["{\"error_code\":110,\"error_msg\":\"Access token invalid\"}\n"]).await;

    assert_eq!(end, StreamEnd::Eof);
    assert_eq!(collector.events.len(), 1);

    let body: serde_json::Value = serde_json::from_str(&collector.events[0].data).unwrap();
    assert_eq!(body["error_code"], 110);
}
