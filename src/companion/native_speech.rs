//! Platform text-to-speech through the `tts` crate.
//!
//! The engine lives on its own thread; the sink only queues utterances.
use std::{
    sync::{mpsc, Mutex},
    thread,
};

use bevy::log::{debug, warn};
use tts::Tts;

use super::speech::{locale_matches, scale_voice_parameter, SpeechError, SpeechSink, Utterance};

pub struct NativeSpeechSink {
    queue: Mutex<mpsc::Sender<Utterance>>,
}

impl NativeSpeechSink {
    /// Spawns the speech thread and waits until the platform engine reports whether it started.
    pub fn start() -> Result<Self, SpeechError> {
        let (queue, utterances) = mpsc::channel::<Utterance>();
        let (ready_tx, ready_rx) = mpsc::channel::<Result<(), String>>();

        thread::Builder::new()
            .name("speech".to_string())
            .spawn(move || {
                let mut engine = match Tts::default() {
                    Ok(engine) => engine,
                    Err(err) => {
                        let _ = ready_tx.send(Err(err.to_string()));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(()));

                for utterance in utterances {
                    if let Err(err) = speak_with(&mut engine, &utterance) {
                        warn!(target: "speech", "{}", err);
                    }
                }
                debug!(target: "speech", "Speech thread stopped");
            })
            .map_err(|err| SpeechError::Unavailable {
                message: err.to_string(),
            })?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                queue: Mutex::new(queue),
            }),
            Ok(Err(message)) => Err(SpeechError::Unavailable { message }),
            Err(_) => Err(SpeechError::Unavailable {
                message: "speech thread exited during startup".to_string(),
            }),
        }
    }
}

impl SpeechSink for NativeSpeechSink {
    fn name(&self) -> &'static str {
        "native"
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        if utterance.text.trim().is_empty() {
            return Err(SpeechError::EmptyUtterance);
        }

        let queue = self.queue.lock().map_err(|_| SpeechError::Rejected {
            message: "speech queue poisoned".to_string(),
        })?;
        queue.send(utterance.clone()).map_err(|_| SpeechError::Rejected {
            message: "speech thread stopped".to_string(),
        })
    }
}

fn rejected(err: tts::Error) -> SpeechError {
    SpeechError::Rejected {
        message: err.to_string(),
    }
}

fn speak_with(engine: &mut Tts, utterance: &Utterance) -> Result<(), SpeechError> {
    let features = engine.supported_features();

    if features.rate {
        let rate = scale_voice_parameter(
            utterance.rate,
            engine.normal_rate(),
            engine.min_rate(),
            engine.max_rate(),
        );
        engine.set_rate(rate).map_err(rejected)?;
    }

    if features.pitch {
        let pitch = scale_voice_parameter(
            utterance.pitch,
            engine.normal_pitch(),
            engine.min_pitch(),
            engine.max_pitch(),
        );
        engine.set_pitch(pitch).map_err(rejected)?;
    }

    if features.voice {
        let voice = engine
            .voices()
            .map_err(rejected)?
            .into_iter()
            .find(|voice| locale_matches(&voice.language().to_string(), &utterance.locale));
        match voice {
            Some(voice) => {
                engine.set_voice(&voice).map_err(rejected)?;
            }
            None => {
                debug!(target: "speech", "No {} voice, using the engine default", utterance.locale);
            }
        }
    }

    engine.speak(utterance.text.as_str(), false).map_err(rejected)?;
    Ok(())
}
