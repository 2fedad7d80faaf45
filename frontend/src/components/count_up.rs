use yew::prelude::*;
use log::warn;
use std::rc::Rc;

use crate::animation::{BrowserScheduler, CountUpConfig, CountUpDriver};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    #[prop_or(0.0)]
    pub start: f64,
    #[prop_or(100.0)]
    pub end: f64,
    /// Seconds
    #[prop_or(config::DEFAULT_COUNT_UP_DURATION_SECS)]
    pub duration: f64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    /// Counting waits at `start` until this turns true.
    #[prop_or(true)]
    pub active: bool,
}

#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let count_config = CountUpConfig::new(props.start, props.end)
        .duration(props.duration)
        .prefix(props.prefix.to_string())
        .suffix(props.suffix.to_string());

    let text = {
        let initial = count_config.format(count_config.initial_value());
        use_state(move || initial)
    };

    let driver_slot = use_mut_ref(|| None::<CountUpDriver<BrowserScheduler>>);
    {
        let text_setter = text.setter();
        let driver_slot = driver_slot.clone();
        use_effect_with_deps(
            move |(count_config, active): &(CountUpConfig, bool)| {
                let mut slot = driver_slot.borrow_mut();
                let running = match (slot.take(), *active) {
                    (Some(driver), true) => {
                        let restarted = driver.restart(count_config);
                        *slot = Some(driver);
                        restarted
                    }
                    (None, true) => {
                        let setter = text_setter.clone();
                        let observer = Rc::new(move |next: String| setter.set(next));
                        CountUpDriver::start(BrowserScheduler, count_config, observer)
                            .map(|driver| *slot = Some(driver))
                    }
                    // Hold at `start` until activated
                    (driver, false) => {
                        if let Some(driver) = driver.as_ref() {
                            driver.stop();
                        }
                        *slot = driver;
                        text_setter.set(count_config.format(count_config.initial_value()));
                        Ok(())
                    }
                };
                if let Err(err) = running {
                    warn!("count-up shows a static value: {}", err);
                    if let Some(driver) = slot.as_ref() {
                        driver.stop();
                    }
                    text_setter.set(count_config.format(count_config.initial_value()));
                }
                || ()
            },
            (count_config, props.active),
        );
    }

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

    html! { <>{(*text).clone()}</> }
}
