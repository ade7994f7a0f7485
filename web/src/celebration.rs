//! Best-effort effects for a won game. Nothing here can fail the game, errors are only logged.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAudioElement;
use yew::prelude::*;

use crate::utils::Modal;

/// How long the banner stays up.
pub(crate) const BANNER_MILLIS: u32 = 3_000;

const WIN_SOUND_URL: &str = "https://www.soundjay.com/misc/sounds/success-celebration-01.mp3";

pub(crate) fn banner_text(winner: &str) -> String {
    format!("{} Wins!", winner)
}

pub(crate) fn celebrate(winner: &str) {
    log::debug!("celebrating {}", winner);
    play_sound();
    fire_confetti();
}

fn play_sound() {
    match HtmlAudioElement::new_with_src(WIN_SOUND_URL) {
        Ok(audio) => {
            if let Err(err) = audio.play() {
                log::warn!("failed to play win sound: {:?}", err);
            }
        }
        Err(err) => log::warn!("failed to load win sound: {:?}", err),
    }
}

fn set(target: &Object, key: &str, value: JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), &value).map(|_| ())
}

fn confetti_options() -> Result<Object, JsValue> {
    let origin = Object::new();
    set(&origin, "y", JsValue::from_f64(0.6))?;

    let options = Object::new();
    set(&options, "particleCount", JsValue::from_f64(100.0))?;
    set(&options, "spread", JsValue::from_f64(70.0))?;
    set(&options, "origin", origin.into())?;
    Ok(options)
}

/// Calls `window.confetti` when the page loaded the canvas-confetti script.
fn fire_confetti() {
    let window = gloo::utils::window();
    let confetti = match Reflect::get(&window, &JsValue::from_str("confetti")) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("failed to look up confetti: {:?}", err);
            return;
        }
    };

    let Some(confetti) = confetti.dyn_ref::<Function>() else {
        log::debug!("confetti script not loaded, skipping");
        return;
    };

    let result = confetti_options().and_then(|options| confetti.call1(&JsValue::NULL, &options));
    if let Err(err) = result {
        log::warn!("failed to fire confetti: {:?}", err);
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct BannerProps {
    pub winner: AttrValue,
}

#[function_component(Banner)]
pub(crate) fn banner_component(props: &BannerProps) -> Html {
    html! {
        <Modal>
            <div id="celebration-banner">{banner_text(&props.winner)}</div>
        </Modal>
    }
}
