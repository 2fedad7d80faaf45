use yew::prelude::*;

use crate::components::stat_card::StatCard;
use crate::components::typing_animation::TypingAnimation;

const AUDIENCES: [&str; 4] = ["Brands", "Entrepreneurs", "Creators", "VCs"];

const STATS: &[(&str, &str, &str)] = &[
    ("94", "%", "Client Satisfaction Rate"),
    ("187", "%", "Average Growth in Followers"),
    ("215", "%", "Average Revenue Increase"),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let words: Vec<AttrValue> = AUDIENCES.iter().map(|word| AttrValue::from(*word)).collect();

    html! {
        <div class="landing">
            <section class="hero">
                <p class="hero__tagline">
                    {"Effortless content creation for "}
                    <span class="hero__audience">
                        <TypingAnimation
                            words={words}
                            typing_speed={100}
                            deleting_speed={50}
                            delay_between_words={2000}
                        />
                    </span>
                </p>
                <h1 class="hero__title">{"Fuel Your Creativity"}</h1>
                <h1 class="hero__title">{"Craft Content That Converts"}</h1>
            </section>

            <section class="stats">
                { STATS.iter().map(|(value, suffix, label)| html! {
                    <StatCard key={*label} value={*value} suffix={*suffix} label={*label} />
                }).collect::<Html>() }
            </section>

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: #0a0a0a;
                    color: #ffffff;
                    overflow-x: hidden;
                }

                .hero {
                    padding: 8rem 2rem 4rem;
                    text-align: center;
                }

                .hero__tagline {
                    font-size: 1.5rem;
                    color: #d1d5db;
                    margin-bottom: 1rem;
                }

                .hero__audience {
                    background: #1f2937;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                }

                .hero__title {
                    font-size: 3.5rem;
                    font-weight: bold;
                    margin: 0.5rem 0;
                }

                .stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .stat-card {
                    background: rgba(0, 0, 0, 0.3);
                    border: 1px solid #1f2937;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    text-align: center;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }

                .stat-card.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .stat-value {
                    font-size: 2.5rem;
                    font-weight: bold;
                    margin-bottom: 0.5rem;
                }

                .stat-label {
                    color: #9ca3af;
                }

                @media (max-width: 768px) {
                    .hero__title {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
