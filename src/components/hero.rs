use yew::prelude::*;

use crate::motion::parallax::{fade, lerp, progress, DriftLayer, SectionParallax, Transform};

// The hero reacts from the very first scrolled pixel.
const PARALLAX: SectionParallax = SectionParallax::new(0.0);
const BACKDROP: DriftLayer = DriftLayer::new(0.5, 900.0);
const ROSE_GLOW_X: DriftLayer = DriftLayer::new(0.3, 500.0);
const ROSE_GLOW_Y: DriftLayer = DriftLayer::new(0.2, 400.0);
const GRAY_GLOW_X: DriftLayer = DriftLayer::new(-0.2, 400.0);
const GRAY_GLOW_Y: DriftLayer = DriftLayer::new(0.4, 600.0);
const HEADLINE: DriftLayer = DriftLayer::new(0.1, 250.0);

// Dim window: fully dimmed (0.6) once 500px deep.
const DIM_RANGE: f64 = 500.0;
const DIM_MAX: f64 = 0.6;
// The scroll cue fades out over the first 300px.
const CUE_FADE_COEFF: f64 = -1.0 / 300.0;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub scroll_y: f64,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let adjusted = PARALLAX.adjusted(props.scroll_y);
    let dim = lerp(0.0, DIM_MAX, progress(props.scroll_y, 0.0, DIM_RANGE));
    let cue = fade(1.0, adjusted, CUE_FADE_COEFF);
    let hero_css = r#"
        .hero {
            position: relative;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
            background: linear-gradient(135deg, #881337, #9f1239, #111827);
        }
        .hero-backdrop {
            position: absolute;
            inset: 0;
            height: 120%;
            background-image: url('/assets/bg.jpg');
            background-size: cover;
            background-position: center;
            filter: brightness(0.3) contrast(1.1);
        }
        .hero-dim {
            position: absolute;
            inset: 0;
            background: #000;
            pointer-events: none;
        }
        .hero-glow {
            position: absolute;
            border-radius: 50%;
            filter: blur(64px);
            pointer-events: none;
        }
        .hero-glow-rose {
            top: 25%;
            right: 25%;
            width: 24rem;
            height: 24rem;
            background: rgba(225, 29, 72, 0.2);
        }
        .hero-glow-gray {
            bottom: 25%;
            left: 25%;
            width: 18rem;
            height: 18rem;
            background: rgba(75, 85, 99, 0.2);
        }
        .hero-content {
            position: relative;
            z-index: 10;
            max-width: 1280px;
            padding: 0 1.5rem;
            text-align: center;
        }
        .hero-title {
            font-size: 4.5rem;
            font-weight: 700;
            color: white;
            line-height: 1.1;
        }
        .hero-brand {
            background: linear-gradient(90deg, #fda4af, #fecdd3, #ffe4e6);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .hero-subtitle {
            font-size: 1.5rem;
            color: #e5e7eb;
            max-width: 48rem;
            margin: 2rem auto 0;
            line-height: 1.6;
        }
        .hero-cta-group {
            display: flex;
            gap: 1rem;
            justify-content: center;
            padding-top: 5rem;
            flex-wrap: wrap;
        }
        .hero-cta {
            background: linear-gradient(90deg, #9f1239, #881337);
            color: white;
            border: none;
            padding: 1rem 2rem;
            border-radius: 0.5rem;
            font-size: 1.125rem;
            font-weight: 600;
            cursor: pointer;
            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
            transition: transform 0.3s;
        }
        .hero-cta:hover {
            transform: scale(1.05);
        }
        .hero-cta-secondary {
            background: transparent;
            border: 2px solid rgba(255, 255, 255, 0.8);
            color: white;
            padding: 1rem 2rem;
            border-radius: 0.5rem;
            font-size: 1.125rem;
            font-weight: 600;
            cursor: pointer;
            backdrop-filter: blur(4px);
            transition: background 0.3s, color 0.3s;
        }
        .hero-cta-secondary:hover {
            background: white;
            color: #881337;
        }
        .scroll-cue {
            position: absolute;
            bottom: 2rem;
            left: 50%;
            transform: translateX(-50%);
            color: rgba(255, 255, 255, 0.7);
            font-size: 2rem;
            animation: cue-bounce 2s ease-in-out infinite;
        }
        @keyframes cue-bounce {
            0%, 100% { margin-bottom: 0; }
            50% { margin-bottom: 10px; }
        }
        @media (max-width: 768px) {
            .hero-title {
                font-size: 3rem;
            }
            .hero-subtitle {
                font-size: 1.25rem;
            }
        }
    "#;
    html! {
        <section class="hero">
            <style>{hero_css}</style>
            <div
                class="hero-backdrop"
                style={Transform::translate_y(BACKDROP.offset(adjusted)).style()}
            ></div>
            <div
                class="hero-glow hero-glow-rose"
                style={Transform::translate(
                    ROSE_GLOW_X.offset(adjusted),
                    ROSE_GLOW_Y.offset(adjusted),
                ).style()}
            ></div>
            <div
                class="hero-glow hero-glow-gray"
                style={Transform::translate(
                    GRAY_GLOW_X.offset(adjusted),
                    GRAY_GLOW_Y.offset(adjusted),
                ).style()}
            ></div>
            <div class="hero-dim" style={Transform::default().and_opacity(dim).style()}></div>
            <div
                class="hero-content"
                style={Transform::translate_y(HEADLINE.offset(adjusted)).style()}
            >
                <h1 class="hero-title">
                    {"Meet "}
                    <span class="hero-brand">{"DiagHer"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"An AI-powered decision support system designed to bring gender-aware care into the clinic."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta">{"See How It Works"}</button>
                    <button class="hero-cta-secondary">{"Watch Demo"}</button>
                </div>
            </div>
            <div class="scroll-cue" style={Transform::default().and_opacity(cue).style()}>
                <i class="fas fa-chevron-down"></i>
            </div>
        </section>
    }
}
