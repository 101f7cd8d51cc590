use yew::prelude::*;

use crate::motion::float::{use_float, Oscillator};
use crate::motion::parallax::{orbit, DriftLayer, ScaleLayer, SectionParallax, Transform};

const PARALLAX: SectionParallax = SectionParallax::new(2200.0);
const TEXT_DRIFT: DriftLayer = DriftLayer::new(0.05, 120.0);

// Decorative dots swinging on slow sine/cosine orbits.
const ROSE_DOT_FREQ: f64 = 0.005;
const GRAY_DOT_FREQ: f64 = 0.01;

// Overlay images zoom from 1.2x/1.3x down to rest as the section scrolls in.
const ZOOM_NEAR: ScaleLayer = ScaleLayer::new(1.2, -0.0003, 1.0, 1.2);
const ZOOM_FAR: ScaleLayer = ScaleLayer::new(1.3, -0.0004, 1.0, 1.3);

// Idle float: +-5px on a slow wave, scroll-independent. The two overlay
// layers take the value with opposite signs so they never move in lock-step.
const FLOAT: Oscillator = Oscillator::new(5.0, 0.002);

struct TechFeature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [TechFeature; 3] = [
    TechFeature {
        icon: "fas fa-arrow-trend-up",
        title: "Adaptive Intelligence",
        description: "Machine learning algorithms continuously refine diagnostic accuracy \
                      based on real-world outcomes",
    },
    TechFeature {
        icon: "fas fa-users",
        title: "Collective Wisdom",
        description: "Every healthcare provider contributes to a growing knowledge base of \
                      gender-specific medical insights",
    },
    TechFeature {
        icon: "fas fa-wand-magic-sparkles",
        title: "Future-Ready",
        description: "Advanced neural networks ensure DiagHer stays ahead of emerging medical \
                      research and treatments",
    },
];

#[derive(Properties, PartialEq)]
pub struct TechnologyProps {
    pub scroll_y: f64,
}

#[function_component(TechnologySection)]
pub fn technology_section(props: &TechnologyProps) -> Html {
    let adjusted = PARALLAX.adjusted(props.scroll_y);
    let float_y = use_float(FLOAT);
    let (rose_x, rose_y) = orbit(adjusted, ROSE_DOT_FREQ, 20.0, 12.0);
    let (gray_x, gray_y) = orbit(adjusted, GRAY_DOT_FREQ, 16.0, 10.0);
    let tech_css = r#"
        .tech-section {
            position: relative;
            padding: 8rem 0;
            background: #111827;
            overflow: hidden;
        }
        .tech-dot {
            position: absolute;
            border-radius: 50%;
        }
        .tech-dot-rose {
            top: 25%;
            left: 25%;
            width: 8px;
            height: 8px;
            background: #fb7185;
            opacity: 0.6;
        }
        .tech-dot-gray {
            top: 75%;
            right: 33%;
            width: 4px;
            height: 4px;
            background: #9ca3af;
            opacity: 0.4;
        }
        .tech-grid {
            max-width: 1280px;
            margin: 0 auto;
            padding: 0 1.5rem;
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 4rem;
            align-items: center;
        }
        .tech-badge {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            background: rgba(159, 18, 57, 0.2);
            color: #fda4af;
            padding: 0.5rem 1rem;
            border-radius: 9999px;
            font-size: 0.875rem;
            font-weight: 500;
            border: 1px solid rgba(159, 18, 57, 0.3);
        }
        .tech-heading {
            font-size: 3rem;
            font-weight: 700;
            color: white;
            line-height: 1.2;
            margin-top: 2rem;
        }
        .tech-accent {
            background: linear-gradient(90deg, #fb7185, #fda4af);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .tech-lede {
            font-size: 1.25rem;
            color: #d1d5db;
            line-height: 1.6;
            margin-top: 1.5rem;
        }
        .tech-features {
            margin-top: 2.5rem;
            display: flex;
            flex-direction: column;
            gap: 1.5rem;
        }
        .tech-feature {
            display: flex;
            align-items: flex-start;
            gap: 1rem;
        }
        .tech-feature i {
            color: #fb7185;
            font-size: 1.25rem;
            margin-top: 0.25rem;
        }
        .tech-feature h3 {
            color: white;
            font-size: 1.125rem;
            margin-bottom: 0.5rem;
        }
        .tech-feature p {
            color: #9ca3af;
            line-height: 1.6;
        }
        .tech-figure {
            position: relative;
        }
        .tech-frame {
            width: 100%;
            height: 24rem;
            border-radius: 1.5rem;
            overflow: hidden;
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
            border: 1px solid #374151;
            position: relative;
        }
        .tech-frame-base {
            width: 100%;
            height: 120%;
            background-image: url('/assets/first.png');
            background-size: cover;
            background-position: center 30%;
        }
        .tech-layer {
            position: absolute;
            inset: 0;
            background-size: cover;
            background-position: center;
            pointer-events: none;
            transform-origin: center center;
        }
        .tech-layer-near {
            background-image: url('/assets/second.png');
            opacity: 0.8;
        }
        .tech-layer-far {
            background-image: url('/assets/third.png');
            opacity: 0.7;
        }
        .tech-frame::after {
            content: '';
            position: absolute;
            inset: 0;
            background: linear-gradient(to top, rgba(17, 24, 39, 0.8), transparent);
        }
        .tech-ring {
            position: absolute;
            border-radius: 50%;
            animation: ring-pulse 2s ease-in-out infinite;
        }
        .tech-ring-rose {
            top: -1rem;
            left: -1rem;
            width: 6rem;
            height: 6rem;
            border: 2px solid rgba(251, 113, 133, 0.3);
        }
        .tech-ring-gray {
            bottom: -1rem;
            right: -1rem;
            width: 4rem;
            height: 4rem;
            border: 2px solid rgba(156, 163, 175, 0.3);
            animation-delay: 1s;
        }
        @keyframes ring-pulse {
            0%, 100% { opacity: 1; }
            50% { opacity: 0.4; }
        }
        @media (max-width: 1024px) {
            .tech-grid {
                grid-template-columns: 1fr;
            }
        }
    "#;
    html! {
        <section id="technology" class="tech-section">
            <style>{tech_css}</style>
            <div
                class="tech-dot tech-dot-rose"
                style={Transform::translate(rose_x, rose_y).style()}
            ></div>
            <div
                class="tech-dot tech-dot-gray"
                style={Transform::translate(gray_x, gray_y).style()}
            ></div>
            <div class="tech-grid">
                <div style={Transform::translate_y(TEXT_DRIFT.offset(adjusted)).style()}>
                    <div class="tech-badge">
                        <i class="fas fa-brain"></i>
                        <span>{"Continuous Learning AI"}</span>
                    </div>
                    <h2 class="tech-heading">
                        <span class="tech-accent">{"Learning"}</span>
                        {" with Every Diagnosis"}
                    </h2>
                    <p class="tech-lede">
                        {"DiagHer evolves with every patient interaction. Doctors feed in confirmed \
                          diagnoses and treatment outcomes, making the system smarter, fairer, and \
                          more accurate over time."}
                    </p>
                    <div class="tech-features">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="tech-feature">
                                <i class={feature.icon}></i>
                                <div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="tech-figure">
                    <div class="tech-frame">
                        <div class="tech-frame-base"></div>
                        <div
                            class="tech-layer tech-layer-near"
                            style={Transform::scale(ZOOM_NEAR.scale(adjusted))
                                .and_translate_y(float_y)
                                .style()}
                        ></div>
                        <div
                            class="tech-layer tech-layer-far"
                            style={Transform::scale(ZOOM_FAR.scale(adjusted))
                                .and_translate_y(-float_y)
                                .style()}
                        ></div>
                    </div>
                    <div class="tech-ring tech-ring-rose"></div>
                    <div class="tech-ring tech-ring-gray"></div>
                </div>
            </div>
        </section>
    }
}
