use yew::prelude::*;

use crate::motion::parallax::{DriftLayer, SectionParallax, Transform};

const PARALLAX: SectionParallax = SectionParallax::new(3600.0);
const BACKDROP: DriftLayer = DriftLayer::new(0.3, 600.0);
const PATTERN: DriftLayer = DriftLayer::new(0.1, 250.0);
const CONTENT: DriftLayer = DriftLayer::new(0.15, 300.0);

// Repeating medical-cross tile, inlined as a data URI.
const PATTERN_TILE: &str = "data:image/svg+xml,%3Csvg width='100' height='100' viewBox='0 0 100 100' xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='%23ffffff' fill-opacity='0.1'%3E%3Cpath d='M50 15v20h-5V15h5zm-10 0v5h-5v-5h5zm20 0v5h-5v-5h5zm-20 10v5h-5v-5h5zm20 0v5h-5v-5h5zM35 50h30v5H35v-5zm0-10h5v5h-5v-5zm25 0h5v5h-5v-5zm0 10h5v5h-5v-5zm-25 0h5v5h-5v-5zm10 15v20h-5V65h5zm10 0v20h-5V65h5zm-5-15v5h-5v-5h5z'/%3E%3C/g%3E%3C/svg%3E";

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub scroll_y: f64,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaProps) -> Html {
    let adjusted = PARALLAX.adjusted(props.scroll_y);
    let cta_css = r#"
        .cta-section {
            position: relative;
            padding: 8rem 0;
            background: linear-gradient(135deg, #881337, #9f1239, #111827);
            overflow: hidden;
        }
        .cta-backdrop {
            position: absolute;
            inset: 0;
            height: 120%;
            background-image: url('/assets/clinic.jpg');
            background-size: cover;
            background-position: center 40%;
            opacity: 0.2;
        }
        .cta-pattern {
            position: absolute;
            inset: 0;
            opacity: 0.1;
            background-repeat: repeat;
        }
        .cta-content {
            position: relative;
            z-index: 10;
            max-width: 56rem;
            margin: 0 auto;
            padding: 0 1.5rem;
            text-align: center;
        }
        .cta-heading {
            font-size: 3rem;
            font-weight: 700;
            color: white;
            line-height: 1.2;
        }
        .cta-accent {
            background: linear-gradient(90deg, #fda4af, #ffe4e6);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .cta-lede {
            font-size: 1.25rem;
            color: #e5e7eb;
            line-height: 1.6;
            max-width: 42rem;
            margin: 2rem auto 0;
        }
        .cta-buttons {
            display: flex;
            gap: 1.5rem;
            justify-content: center;
            padding-top: 2rem;
            flex-wrap: wrap;
        }
        .cta-primary {
            background: white;
            color: #881337;
            border: none;
            padding: 1rem 2.5rem;
            border-radius: 0.5rem;
            font-size: 1.125rem;
            font-weight: 600;
            cursor: pointer;
            display: flex;
            align-items: center;
            gap: 0.5rem;
            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
            transition: transform 0.3s, background 0.3s;
        }
        .cta-primary:hover {
            transform: scale(1.05);
            background: #f3f4f6;
        }
        .cta-secondary {
            background: transparent;
            border: 2px solid rgba(255, 255, 255, 0.8);
            color: white;
            padding: 1rem 2.5rem;
            border-radius: 0.5rem;
            font-size: 1.125rem;
            font-weight: 600;
            cursor: pointer;
            display: flex;
            align-items: center;
            gap: 0.5rem;
            backdrop-filter: blur(4px);
            transition: background 0.3s, color 0.3s;
        }
        .cta-secondary:hover {
            background: white;
            color: #881337;
        }
        .cta-reassurance {
            padding-top: 2rem;
            color: #fecdd3;
            font-size: 0.875rem;
        }
        @media (max-width: 768px) {
            .cta-heading {
                font-size: 2.25rem;
            }
        }
    "#;
    html! {
        <section class="cta-section">
            <style>{cta_css}</style>
            <div
                class="cta-backdrop"
                style={Transform::translate_y(BACKDROP.offset(adjusted)).style()}
            ></div>
            <div
                class="cta-pattern"
                style={format!(
                    "background-image: url(\"{}\"); {}",
                    PATTERN_TILE,
                    Transform::translate_y(PATTERN.offset(adjusted)).style()
                )}
            ></div>
            <div
                class="cta-content"
                style={Transform::translate_y(CONTENT.offset(adjusted)).style()}
            >
                <h2 class="cta-heading">
                    {"Ready to Transform "}
                    <span class="cta-accent">{"Your Practice?"}</span>
                </h2>
                <p class="cta-lede">
                    {"Join the healthcare revolution. Give your female patients the gender-aware \
                      care they deserve with DiagHer's AI-powered insights."}
                </p>
                <div class="cta-buttons">
                    <button class="cta-primary">
                        <span>{"Start Free Trial"}</span>
                        <i class="fas fa-arrow-right"></i>
                    </button>
                    <button class="cta-secondary">
                        <span>{"Schedule Demo"}</span>
                        <i class="fas fa-brain"></i>
                    </button>
                </div>
                <div class="cta-reassurance">
                    <p>{"✓ 30-day free trial • ✓ No setup fees • ✓ Cancel anytime"}</p>
                </div>
            </div>
        </section>
    }
}
