use yew::prelude::*;

struct SolutionStep {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    extra: StepExtra,
}

enum StepExtra {
    Sample(&'static str),
    Results(&'static [(&'static str, &'static str)]),
    Alert(&'static str),
}

const STEPS: [SolutionStep; 3] = [
    SolutionStep {
        icon: "fas fa-stethoscope",
        title: "Symptom Analysis",
        description: "Doctor enters patient symptoms into DiagHer's intelligent interface. \
                      Our AI instantly analyzes patterns through a gender-specific lens.",
        image: "https://images.pexels.com/photos/4173251/pexels-photo-4173251.jpeg?auto=compress&cs=tinysrgb&w=600",
        extra: StepExtra::Sample("\"Chest pain, fatigue, nausea...\""),
    },
    SolutionStep {
        icon: "fas fa-bullseye",
        title: "Smart Diagnosis",
        description: "DiagHer provides gender-specific disease likelihoods based on current \
                      research, highlighting conditions often missed in women.",
        image: "https://images.pexels.com/photos/8849295/pexels-photo-8849295.jpeg?auto=compress&cs=tinysrgb&w=600",
        extra: StepExtra::Results(&[("Heart Disease", "78%"), ("Anxiety", "23%")]),
    },
    SolutionStep {
        icon: "fas fa-circle-check",
        title: "Safe Treatment",
        description: "Analyzes prescribed medications for women-specific side effects and \
                      suggests safer alternatives with transparent risk analysis.",
        image: "/assets/treatment.jpg",
        extra: StepExtra::Alert("Safer Alternative Found"),
    },
];

/// The "how it works" cards. The section does not move with scroll, so it
/// takes no props.
#[function_component(SolutionSection)]
pub fn solution_section() -> Html {
    let solution_css = r#"
        .solution-section {
            position: relative;
            padding: 8rem 0;
            background: #f9fafb;
            overflow: hidden;
        }
        .solution-halo {
            position: absolute;
            top: 0;
            left: 50%;
            transform: translateX(-50%);
            width: 24rem;
            height: 24rem;
            background: #ffe4e6;
            border-radius: 50%;
            filter: blur(64px);
            opacity: 0.6;
        }
        .solution-inner {
            max-width: 1280px;
            margin: 0 auto;
            padding: 0 1.5rem;
            position: relative;
        }
        .solution-header {
            text-align: center;
            margin-bottom: 5rem;
        }
        .solution-badge {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            background: linear-gradient(90deg, #9f1239, #881337);
            color: white;
            padding: 0.5rem 1rem;
            border-radius: 9999px;
            font-size: 0.875rem;
            font-weight: 500;
            margin-bottom: 1.5rem;
            box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
        }
        .solution-heading {
            font-size: 3rem;
            font-weight: 700;
            color: #111827;
            line-height: 1.2;
            margin-bottom: 1.5rem;
        }
        .solution-accent {
            background: linear-gradient(90deg, #9f1239, #e11d48);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .solution-lede {
            font-size: 1.25rem;
            color: #4b5563;
            max-width: 48rem;
            margin: 0 auto;
        }
        .solution-steps {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 3rem;
        }
        .step-card {
            background: white;
            border-radius: 1.5rem;
            padding: 2rem;
            height: 100%;
            box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
            border: 1px solid #e5e7eb;
            transition: box-shadow 0.5s, transform 0.5s;
        }
        .step-card:hover {
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
            transform: scale(1.05);
        }
        .step-icon {
            width: 4rem;
            height: 4rem;
            background: #9f1239;
            border-radius: 1rem;
            display: flex;
            align-items: center;
            justify-content: center;
            color: white;
            font-size: 1.5rem;
            margin-bottom: 1.5rem;
            box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
        }
        .step-card h3 {
            font-size: 1.5rem;
            font-weight: 700;
            color: #111827;
            margin-bottom: 1rem;
        }
        .step-card > p {
            color: #4b5563;
            margin-bottom: 1.5rem;
            line-height: 1.6;
        }
        .step-image {
            width: 100%;
            height: 12rem;
            border-radius: 0.75rem;
            overflow: hidden;
            border: 1px solid #e5e7eb;
            margin-bottom: 1rem;
            background-size: cover;
            background-position: center 40%;
        }
        .step-note {
            background: #f9fafb;
            border-radius: 0.75rem;
            padding: 1rem;
            border: 1px solid #e5e7eb;
        }
        .step-note-label {
            font-size: 0.875rem;
            color: #6b7280;
            margin-bottom: 0.5rem;
        }
        .step-note-sample {
            color: #1f2937;
            font-style: italic;
            font-weight: 500;
        }
        .step-result {
            display: flex;
            justify-content: space-between;
            align-items: center;
            background: #f9fafb;
            border-radius: 0.5rem;
            padding: 0.75rem;
            border: 1px solid #e5e7eb;
            margin-bottom: 0.5rem;
        }
        .step-result span:first-child {
            font-size: 0.875rem;
            color: #374151;
            font-weight: 500;
        }
        .step-result span:last-child {
            font-size: 0.875rem;
            font-weight: 600;
            color: #9f1239;
        }
        .step-alert {
            background: #ecfdf5;
            border-radius: 0.75rem;
            padding: 1rem;
            border: 1px solid #a7f3d0;
        }
        .step-alert-title {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            color: #059669;
            font-size: 0.875rem;
            font-weight: 500;
            margin-bottom: 0.5rem;
        }
        .step-alert p {
            font-size: 0.875rem;
            color: #4b5563;
        }
        @media (max-width: 768px) {
            .solution-steps {
                grid-template-columns: 1fr;
            }
            .solution-heading {
                font-size: 2.25rem;
            }
        }
    "#;
    html! {
        <section id="solution" class="solution-section">
            <style>{solution_css}</style>
            <div class="solution-halo"></div>
            <div class="solution-inner">
                <div class="solution-header">
                    <div class="solution-badge">
                        <i class="fas fa-brain"></i>
                        <span>{"Intelligent Solution"}</span>
                    </div>
                    <h2 class="solution-heading">
                        {"How "}
                        <span class="solution-accent">{"DiagHer"}</span>
                        {" Works"}
                    </h2>
                    <p class="solution-lede">
                        {"Our AI-powered system provides gender-specific medical insights at every \
                          step of the diagnostic journey"}
                    </p>
                </div>
                <div class="solution-steps">
                    { for STEPS.iter().map(render_step) }
                </div>
            </div>
        </section>
    }
}

fn render_step(step: &SolutionStep) -> Html {
    html! {
        <div class="step-card">
            <div class="step-icon">
                <i class={step.icon}></i>
            </div>
            <h3>{step.title}</h3>
            <p>{step.description}</p>
            <div
                class="step-image"
                style={format!("background-image: url('{}');", step.image)}
            ></div>
            {
                match &step.extra {
                    StepExtra::Sample(sample) => html! {
                        <div class="step-note">
                            <div class="step-note-label">{"Sample Input:"}</div>
                            <div class="step-note-sample">{*sample}</div>
                        </div>
                    },
                    StepExtra::Results(results) => html! {
                        <div>
                            { for results.iter().map(|(condition, percentage)| html! {
                                <div class="step-result">
                                    <span>{*condition}</span>
                                    <span>{*percentage}</span>
                                </div>
                            }) }
                        </div>
                    },
                    StepExtra::Alert(alert) => html! {
                        <div class="step-alert">
                            <div class="step-alert-title">
                                <i class="fas fa-circle-check"></i>
                                <span>{*alert}</span>
                            </div>
                            <p>{"Adjusted dosage for optimal female metabolism"}</p>
                        </div>
                    },
                }
            }
        </div>
    }
}
