use yew::prelude::*;
use gloo_timers::callback::Interval;
use log::warn;
use std::rc::Rc;

use crate::animation::{BrowserScheduler, CursorBlink, Frame, TypewriterConfig, TypewriterDriver};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct TypingAnimationProps {
    pub words: Vec<AttrValue>,
    #[prop_or(config::DEFAULT_TYPING_SPEED_MS)]
    pub typing_speed: u32,
    #[prop_or(config::DEFAULT_DELETING_SPEED_MS)]
    pub deleting_speed: u32,
    #[prop_or(config::DEFAULT_DELAY_BETWEEN_WORDS_MS)]
    pub delay_between_words: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypingAnimation)]
pub fn typing_animation(props: &TypingAnimationProps) -> Html {
    let frame = use_state(Frame::default);
    let cursor_visible = use_state(|| true);

    let typewriter_config = TypewriterConfig::new(props.words.iter().map(|word| word.to_string()))
        .typing_speed(props.typing_speed)
        .deleting_speed(props.deleting_speed)
        .delay_between_words(props.delay_between_words);

    // One driver per mount; prop changes restart it in place.
    let driver_slot = use_mut_ref(|| None::<TypewriterDriver<BrowserScheduler>>);
    {
        let frame_setter = frame.setter();
        let driver_slot = driver_slot.clone();
        use_effect_with_deps(
            move |typewriter_config: &TypewriterConfig| {
                let mut slot = driver_slot.borrow_mut();
                let running = match slot.take() {
                    Some(driver) => {
                        let restarted = driver.restart(typewriter_config);
                        *slot = Some(driver);
                        restarted
                    }
                    None => {
                        let setter = frame_setter.clone();
                        let observer = Rc::new(move |next: Frame| setter.set(next));
                        TypewriterDriver::start(BrowserScheduler, typewriter_config, observer)
                            .map(|driver| *slot = Some(driver))
                    }
                };
                if let Err(err) = running {
                    warn!("typing animation stays idle: {}", err);
                    if let Some(driver) = slot.as_ref() {
                        driver.stop();
                    }
                    frame_setter.set(Frame::default());
                }
                || ()
            },
            typewriter_config,
        );
    }

    // Dropping the driver clears its pending timeout
    {
        let driver_slot = driver_slot.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    driver_slot.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Cursor blinks on its own clock
    {
        let cursor_setter = cursor_visible.setter();
        use_effect_with_deps(
            move |_| {
                let mut cursor = CursorBlink::default();
                let interval = Interval::new(CursorBlink::PERIOD_MS, move || {
                    cursor_setter.set(cursor.toggle());
                });
                move || drop(interval)
            },
            (),
        );
    }

    if props.words.is_empty() || !frame.visible {
        return html! {};
    }

    html! {
        <span class={classes!("typing-animation", props.class.clone())}>
            <style>
                {r#"
                    .typing-animation {
                        display: inline-block;
                        animation: typingFadeIn 0.2s ease-in;
                    }
                    .typing-cursor {
                        display: inline-block;
                        margin-left: 0.25rem;
                        transition: opacity 0.2s ease-in-out;
                    }
                    .typing-cursor.hidden {
                        opacity: 0;
                    }
                    @keyframes typingFadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
            {frame.text.clone()}
            <span class={classes!("typing-cursor", (!*cursor_visible).then(|| "hidden"))}>{"|"}</span>
        </span>
    }
}
