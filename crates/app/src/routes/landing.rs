use dioxus::prelude::*;

use crate::routes::Route;

/// Marketing landing page: hero, feature grid, testimonials, and a
/// call-to-action pointing at signup.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "landing-page",
            section { class: "landing-hero",
                h1 { class: "landing-hero-title",
                    "Empower Your Learning with "
                    span { class: "landing-accent", "EduHub" }
                }
                p { class: "landing-hero-sub",
                    "Interactive courses, personalized learning paths, and powerful study tools to boost your skills."
                }
                div { class: "landing-hero-actions",
                    Link { to: Route::Signup {}, class: "button-link primary", "Get Started" }
                    Link { to: Route::Login {}, class: "button-link outline", "Log In" }
                }
            }

            section { class: "landing-features",
                h2 { "Why Choose EduHub?" }
                div { class: "landing-feature-grid",
                    FeatureCard {
                        title: "Expert Courses",
                        desc: "Curated by industry leaders with real-world insights.",
                    }
                    FeatureCard {
                        title: "Hands-On Learning",
                        desc: "Build projects while you learn for practical experience.",
                    }
                    FeatureCard {
                        title: "Community Support",
                        desc: "Join peers, mentors, and instructors worldwide.",
                    }
                }
            }

            section { class: "landing-testimonials",
                h2 { "What Our Learners Say" }
                div { class: "landing-testimonial-grid",
                    Testimonial {
                        text: "EduHub transformed my career. The courses are engaging and practical!",
                        author: "Sarah M.",
                    }
                    Testimonial {
                        text: "I loved the projects! They helped me build a strong portfolio.",
                        author: "James K.",
                    }
                }
            }

            section { class: "landing-cta",
                h2 { "Ready to Start Learning?" }
                p { "Join thousands of learners and level up your skills today." }
                Link { to: Route::Signup {}, class: "button-link secondary", "Sign Up Now" }
            }

            footer { class: "landing-footer",
                "\u{00a9} 2025 EduHub. All rights reserved."
            }
        }
    }
}

#[component]
fn FeatureCard(title: &'static str, desc: &'static str) -> Element {
    rsx! {
        div { class: "landing-feature-card",
            h3 { "{title}" }
            p { "{desc}" }
        }
    }
}

#[component]
fn Testimonial(text: &'static str, author: &'static str) -> Element {
    rsx! {
        div { class: "landing-testimonial",
            p { class: "landing-testimonial-text", "\u{201c}{text}\u{201d}" }
            p { class: "landing-testimonial-author", "- {author}" }
        }
    }
}
