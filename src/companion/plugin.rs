//! Companion plugin wiring the responder, speech sink, and messages.
use bevy::prelude::*;

use super::{
    config::CompanionSettings,
    events::{CompanionQuery, CompanionReply},
    responder::KeywordResponder,
    speech::ActiveSpeechSink,
    systems::{answer_companion_queries, speak_companion_replies},
    trivia::TriviaCalendar,
};

pub struct CompanionPlugin;

impl Plugin for CompanionPlugin {
    fn build(&self, app: &mut App) {
        let settings = CompanionSettings::load_or_default();
        let sink = if settings.speech.enabled {
            ActiveSpeechSink::platform_default()
        } else {
            ActiveSpeechSink::default()
        };

        app.insert_resource(settings.calendar)
            .insert_resource(settings)
            .insert_resource(sink)
            .init_resource::<KeywordResponder>()
            .add_message::<CompanionQuery>()
            .add_message::<CompanionReply>()
            .add_systems(Startup, log_companion_setup)
            .add_systems(
                Update,
                (answer_companion_queries, speak_companion_replies).chain(),
            );
    }
}

fn log_companion_setup(
    settings: Res<CompanionSettings>,
    sink: Res<ActiveSpeechSink>,
    calendar: Res<TriviaCalendar>,
) {
    info!(
        "CompanionPlugin initialised with speech sink '{}' ({}, rate {:.1}, pitch {:.1}, {}), trivia calendar {:?}",
        sink.name(),
        if settings.speech.enabled {
            "enabled"
        } else {
            "muted"
        },
        settings.speech.rate,
        settings.speech.pitch,
        settings.speech.locale,
        *calendar
    );
}
