use yew::prelude::*;

use crate::motion::parallax::{DriftLayer, SectionParallax, Transform};

// Sits one viewport down; inert until the reader is close.
const PARALLAX: SectionParallax = SectionParallax::new(600.0);
const TEXT_DRIFT: DriftLayer = DriftLayer::new(0.1, 200.0);
const IMAGE_DRIFT: DriftLayer = DriftLayer::new(0.15, 300.0);
const CARD_DRIFT: DriftLayer = DriftLayer::new(0.1, 200.0);

struct ProblemStat {
    stat: &'static str,
    title: &'static str,
    desc: &'static str,
}

const STATS: [ProblemStat; 3] = [
    ProblemStat {
        stat: "80%",
        title: "Misdiagnosis Rate",
        desc: "Women are 80% more likely to be misdiagnosed during heart attacks",
    },
    ProblemStat {
        stat: "2x",
        title: "Drug Reactions",
        desc: "Women experience twice as many adverse drug reactions",
    },
    ProblemStat {
        stat: "75%",
        title: "Research Gap",
        desc: "75% of medical research excludes female subjects",
    },
];

#[derive(Properties, PartialEq)]
pub struct ProblemProps {
    pub scroll_y: f64,
}

#[function_component(ProblemSection)]
pub fn problem_section(props: &ProblemProps) -> Html {
    let adjusted = PARALLAX.adjusted(props.scroll_y);
    let problem_css = r#"
        .problem-section {
            position: relative;
            padding: 8rem 0;
            background: white;
            overflow: hidden;
        }
        .problem-blur {
            position: absolute;
            top: 0;
            right: 0;
            width: 24rem;
            height: 24rem;
            background: #fff1f2;
            filter: blur(64px);
            opacity: 0.6;
        }
        .problem-grid {
            max-width: 1280px;
            margin: 0 auto;
            padding: 0 1.5rem;
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 4rem;
            align-items: center;
        }
        .problem-badge {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            background: #ffe4e6;
            color: #9f1239;
            padding: 0.5rem 1rem;
            font-size: 0.875rem;
            font-weight: 500;
            box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
        }
        .problem-heading {
            font-size: 3rem;
            font-weight: 700;
            color: #111827;
            line-height: 1.2;
            margin-top: 2rem;
        }
        .problem-accent {
            background: linear-gradient(90deg, #9f1239, #e11d48);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .problem-lede {
            font-size: 1.25rem;
            color: #4b5563;
            line-height: 1.6;
            margin-top: 1.5rem;
        }
        .problem-stats {
            margin-top: 2.5rem;
            display: flex;
            flex-direction: column;
            gap: 1.5rem;
        }
        .problem-stat {
            display: flex;
            align-items: flex-start;
            gap: 1rem;
        }
        .problem-stat-bubble {
            width: 3rem;
            height: 3rem;
            flex-shrink: 0;
            background: linear-gradient(135deg, #ffe4e6, #fecdd3);
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            color: #9f1239;
            font-weight: 700;
            box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
        }
        .problem-stat h3 {
            font-size: 1.125rem;
            color: #111827;
            margin-bottom: 0.25rem;
        }
        .problem-stat p {
            color: #4b5563;
        }
        .problem-figure {
            position: relative;
        }
        .problem-frame {
            width: 100%;
            height: 24rem;
            overflow: hidden;
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
            position: relative;
        }
        .problem-image {
            width: 100%;
            height: 100%;
            background-image: url('/assets/problem.jpg');
            background-size: cover;
            background-position: center;
        }
        .problem-frame::after {
            content: '';
            position: absolute;
            inset: 0;
            background: linear-gradient(to top, rgba(17, 24, 39, 0.4), transparent);
        }
        .problem-card {
            position: absolute;
            bottom: -2rem;
            right: -2rem;
            background: white;
            padding: 1.5rem;
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
            backdrop-filter: blur(4px);
            text-align: center;
        }
        .problem-card-number {
            font-size: 1.875rem;
            font-weight: 700;
            color: #9f1239;
        }
        .problem-card-label {
            font-size: 0.875rem;
            color: #4b5563;
            font-weight: 500;
        }
        @media (max-width: 1024px) {
            .problem-grid {
                grid-template-columns: 1fr;
            }
        }
    "#;
    html! {
        <section class="problem-section">
            <style>{problem_css}</style>
            <div class="problem-blur"></div>
            <div class="problem-grid">
                <div style={Transform::translate_y(TEXT_DRIFT.offset(adjusted)).style()}>
                    <div class="problem-badge">
                        <i class="fas fa-triangle-exclamation"></i>
                        <span>{"Critical Healthcare Gap"}</span>
                    </div>
                    <h2 class="problem-heading">
                        {"Women's Health "}
                        <span class="problem-accent">{"Overlooked"}</span>
                        {" for Too Long"}
                    </h2>
                    <p class="problem-lede">
                        {"Medical research has historically excluded women, leading to misdiagnoses, \
                          inappropriate treatments, and preventable complications. It's time for change."}
                    </p>
                    <div class="problem-stats">
                        { for STATS.iter().map(|item| html! {
                            <div class="problem-stat">
                                <div class="problem-stat-bubble">{item.stat}</div>
                                <div>
                                    <h3>{item.title}</h3>
                                    <p>{item.desc}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="problem-figure">
                    <div class="problem-frame">
                        <div
                            class="problem-image"
                            style={Transform::translate_y(IMAGE_DRIFT.offset(adjusted)).style()}
                        ></div>
                    </div>
                    <div
                        class="problem-card"
                        style={Transform::translate_y(CARD_DRIFT.offset(adjusted)).style()}
                    >
                        <div class="problem-card-number">{"67%"}</div>
                        <div class="problem-card-label">{"Pain Dismissed"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
