use yew::prelude::*;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let nav_css = r#"
        .top-nav {
            position: fixed;
            top: 0;
            width: 100%;
            background: rgba(255, 255, 255, 0.95);
            backdrop-filter: blur(8px);
            z-index: 50;
            border-bottom: 1px solid #e5e7eb;
        }
        .top-nav-inner {
            max-width: 1280px;
            margin: 0 auto;
            padding: 1rem 1.5rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        .nav-logo {
            display: flex;
            align-items: center;
            gap: 0.5rem;
        }
        .nav-logo-mark {
            width: 2rem;
            height: 2rem;
            background: linear-gradient(135deg, #9f1239, #881337);
            border-radius: 0.5rem;
            display: flex;
            align-items: center;
            justify-content: center;
            color: white;
        }
        .nav-logo span {
            font-size: 1.25rem;
            font-weight: 700;
            color: #111827;
        }
        .nav-links {
            display: flex;
            align-items: center;
            gap: 2rem;
        }
        .nav-links a {
            color: #4b5563;
            text-decoration: none;
            font-weight: 500;
            transition: color 0.3s;
        }
        .nav-links a:hover {
            color: #9f1239;
        }
        .nav-cta {
            background: linear-gradient(90deg, #9f1239, #881337);
            color: white;
            border: none;
            padding: 0.5rem 1.5rem;
            border-radius: 0.5rem;
            font-size: 1rem;
            cursor: pointer;
            box-shadow: 0 4px 14px rgba(159, 18, 57, 0.3);
            transition: transform 0.3s, box-shadow 0.3s;
        }
        .nav-cta:hover {
            transform: scale(1.05);
            box-shadow: 0 6px 20px rgba(159, 18, 57, 0.4);
        }
        @media (max-width: 768px) {
            .nav-links a {
                display: none;
            }
        }
    "#;
    html! {
        <nav class="top-nav">
            <style>{nav_css}</style>
            <div class="top-nav-inner">
                <div class="nav-logo">
                    <div class="nav-logo-mark">
                        <i class="fas fa-stethoscope"></i>
                    </div>
                    <span>{"DiagHer"}</span>
                </div>
                <div class="nav-links">
                    <a href="#solution">{"Solution"}</a>
                    <a href="#technology">{"Technology"}</a>
                    <a href="#impact">{"Impact"}</a>
                    <button class="nav-cta">{"Get Started"}</button>
                </div>
            </div>
        </nav>
    }
}
