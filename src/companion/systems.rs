//! Systems answering queries and voicing the answers.
use bevy::{ecs::message::MessageReader, prelude::*};

use super::{
    config::CompanionSettings,
    events::{CompanionQuery, CompanionReply},
    responder::KeywordResponder,
    speech::ActiveSpeechSink,
    trivia::TriviaCalendar,
};

/// Answers every pending query with the keyword responder.
pub fn answer_companion_queries(
    responder: Res<KeywordResponder>,
    calendar: Res<TriviaCalendar>,
    mut queries: MessageReader<CompanionQuery>,
    mut replies: MessageWriter<CompanionReply>,
) {
    for query in queries.read() {
        let reply = responder.respond(&query.text, calendar.day_of_month());
        debug!(target: "companion", "\"{}\" -> \"{}\"", query.text, reply);

        replies.write(CompanionReply {
            query: query.text.clone(),
            reply,
        });
    }
}

/// Pipes replies to the active speech sink.
pub fn speak_companion_replies(
    settings: Res<CompanionSettings>,
    sink: Res<ActiveSpeechSink>,
    mut replies: MessageReader<CompanionReply>,
) {
    for reply in replies.read() {
        if !settings.speech.enabled {
            continue;
        }

        let utterance = settings.speech.utterance(reply.reply.clone());
        if let Err(err) = sink.speak(&utterance) {
            warn!(target: "speech", "{} sink failed: {}", sink.name(), err);
        }
    }
}
