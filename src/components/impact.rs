use yew::prelude::*;

const STATS: [(&str, &str, &str); 4] = [
    ("89%", "Diagnostic Accuracy", "Improved gender-specific diagnosis rates"),
    ("67%", "Reduced Misdiagnosis", "Fewer missed conditions in women"),
    ("52%", "Better Outcomes", "Improved patient treatment success"),
    ("10K+", "Lives Improved", "Patients receiving better care"),
];

#[function_component(ImpactSection)]
pub fn impact_section() -> Html {
    let impact_css = r#"
        .impact-section {
            position: relative;
            padding: 8rem 0;
            background: white;
            overflow: hidden;
        }
        .impact-halo {
            position: absolute;
            top: 0;
            right: 0;
            width: 24rem;
            height: 24rem;
            background: rgba(254, 205, 211, 0.3);
            border-radius: 50%;
            filter: blur(64px);
        }
        .impact-inner {
            max-width: 1280px;
            margin: 0 auto;
            padding: 0 1.5rem;
            position: relative;
        }
        .impact-header {
            text-align: center;
            margin-bottom: 5rem;
        }
        .impact-badge {
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
        .impact-heading {
            font-size: 3rem;
            font-weight: 700;
            color: #111827;
            line-height: 1.2;
            margin-bottom: 1.5rem;
        }
        .impact-accent {
            background: linear-gradient(90deg, #9f1239, #e11d48);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .impact-lede {
            font-size: 1.25rem;
            color: #4b5563;
            max-width: 48rem;
            margin: 0 auto;
        }
        .impact-stats {
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 2rem;
            margin-bottom: 4rem;
        }
        .impact-stat-card {
            background: linear-gradient(135deg, #f9fafb, white);
            border-radius: 1rem;
            padding: 2rem;
            text-align: center;
            box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
            border: 1px solid #e5e7eb;
            transition: box-shadow 0.5s, transform 0.5s;
        }
        .impact-stat-card:hover {
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
            transform: scale(1.05);
            border-color: #fecdd3;
        }
        .impact-number {
            font-size: 2.25rem;
            font-weight: 700;
            background: linear-gradient(90deg, #9f1239, #e11d48);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            margin-bottom: 0.5rem;
        }
        .impact-stat-card h3 {
            font-size: 1.125rem;
            color: #111827;
            margin-bottom: 0.5rem;
        }
        .impact-stat-card p {
            font-size: 0.875rem;
            color: #4b5563;
        }
        .impact-testimonial {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 3rem;
            align-items: center;
        }
        .impact-quote {
            background: linear-gradient(135deg, #f9fafb, white);
            border-radius: 1.5rem;
            padding: 3rem;
            box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
            border: 1px solid #e5e7eb;
        }
        .impact-quote blockquote {
            font-size: 1.25rem;
            color: #374151;
            line-height: 1.6;
            font-style: italic;
            margin: 0 0 1.5rem;
        }
        .impact-author {
            font-weight: 600;
            color: #111827;
            font-size: 1.125rem;
        }
        .impact-author-role {
            color: #4b5563;
        }
        .impact-photo {
            width: 100%;
            height: 24rem;
            border-radius: 1.5rem;
            overflow: hidden;
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
            border: 1px solid #e5e7eb;
            background-image: url('https://images.pexels.com/photos/5215024/pexels-photo-5215024.jpeg?auto=compress&cs=tinysrgb&w=800');
            background-size: cover;
            background-position: center 30%;
        }
        @media (max-width: 1024px) {
            .impact-stats {
                grid-template-columns: repeat(2, 1fr);
            }
            .impact-testimonial {
                grid-template-columns: 1fr;
            }
        }
        @media (max-width: 640px) {
            .impact-stats {
                grid-template-columns: 1fr;
            }
        }
    "#;
    html! {
        <section id="impact" class="impact-section">
            <style>{impact_css}</style>
            <div class="impact-halo"></div>
            <div class="impact-inner">
                <div class="impact-header">
                    <div class="impact-badge">
                        <i class="fas fa-arrow-trend-up"></i>
                        <span>{"Real Impact"}</span>
                    </div>
                    <h2 class="impact-heading">
                        {"Transforming "}
                        <span class="impact-accent">{"Healthcare"}</span>
                        {" Outcomes"}
                    </h2>
                    <p class="impact-lede">
                        {"See how DiagHer is already making a difference in clinics worldwide"}
                    </p>
                </div>
                <div class="impact-stats">
                    { for STATS.iter().map(|(number, label, desc)| html! {
                        <div class="impact-stat-card">
                            <div class="impact-number">{*number}</div>
                            <h3>{*label}</h3>
                            <p>{*desc}</p>
                        </div>
                    }) }
                </div>
                <div class="impact-testimonial">
                    <div class="impact-quote">
                        <blockquote>
                            {"\"DiagHer has revolutionized how I approach women's healthcare. The AI \
                              catches patterns I might have missed and suggests treatments I wouldn't \
                              have considered. My female patients are finally getting the care they \
                              deserve.\""}
                        </blockquote>
                        <div class="impact-author">{"Dr. Sarah Johnson"}</div>
                        <div class="impact-author-role">{"Internal Medicine, Boston Medical Center"}</div>
                    </div>
                    <div class="impact-photo"></div>
                </div>
            </div>
        </section>
    }
}
