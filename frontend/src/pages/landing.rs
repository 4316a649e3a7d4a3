use crate::components::feature_showcase::{FeatureShowcase, Showcase, SnippetLine};
use crate::components::signup_form::{use_signup_session, SignupForm};
use crate::effects::floating_cats::FloatingCats;
use crate::effects::paw_trail::PawTrailOverlay;
use crate::utils::signup::SignupSource;
use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

pub const DESCRIPTION_PREVIEW_CHARS: usize = 90;

const FEATURES: [(&str, &str, &str); 6] = [
    ("fas fa-shield-halved", "Privacy First", "End-to-end encrypted chats, nicknames until you're ready"),
    ("fas fa-heart", "Interest Matching", "Connect by fandoms, languages, and passions"),
    ("fas fa-code", "Geek Features", "Markdown, code snippets, and linux commands"),
    ("fas fa-trophy", "Achievements", "Badges, easter eggs, and gamification"),
    ("fas fa-users", "Multiple Modes", "Dating, buddies and groups"),
    ("fas fa-location-dot", "IRL Events", "Discover nearby geek meetups and conventions"),
];

const PRIVACY_POINTS: [(&str, &str, &str); 3] = [
    ("fas fa-cat", "Identity Protection", "Unique generated nicknames and avatars keep you anonymous until you're ready"),
    ("fas fa-message", "E2E Encryption", "All chats are end-to-end encrypted for maximum privacy"),
    ("fas fa-wand-magic-sparkles", "Interest Matching", "Match by programming languages, fandoms, and shared passions"),
];

fn geek_features() -> Vec<Showcase> {
    use SnippetLine::*;
    vec![
        Showcase {
            title: "Code in Your Conversations",
            description: "Share code snippets with syntax highlighting, use markdown for formatting, and share your GitHub repos or latest projects.",
            highlights: vec![
                ("fas fa-code", "Syntax highlighting"),
                ("fas fa-mug-hot", "Markdown support for rich formatting"),
            ],
            snippet_title: "match.ts",
            snippet: vec![
                Comment("// I met my match on cat2gether!"),
                Command("const love = () => {"),
                Output("  return \"Found through cat2gether! 💜\""),
                Command("}"),
            ],
        },
        Showcase {
            title: "Encryption & Security",
            description: "Your chats are safe, private, and only visible to you and your match. Not even our servers can read them.",
            highlights: vec![
                ("fas fa-lock", "End-to-end encryption"),
                ("fas fa-shield-halved", "Zero-knowledge privacy"),
                ("fas fa-user-secret", "Anonymous matching"),
            ],
            snippet_title: "encryption.ts",
            snippet: vec![
                Comment("// Messages are encrypted by default"),
                Command("gpg --encrypt --recipient 'match.pub'"),
                Output("Message: 'Hi, wanna grab coffee? ☕'"),
            ],
        },
        Showcase {
            title: "cat2gether Customization",
            description: "Build your own custom themes, cat2packs and customize your profile however you want.",
            highlights: vec![
                ("fas fa-palette", "Very customizable theme builder"),
                ("fas fa-cat", "Custom cat ASCII and stickers"),
                ("fas fa-user-pen", "Ultimate profile customization"),
            ],
            snippet_title: "customization.ts",
            snippet: vec![
                Comment("// My current customization"),
                Command("cat2 --pack"),
                Output("Your current catpack is default"),
                Command("cat2 --pack set sleepy"),
                Output("Your catpack has been set to sleepy"),
            ],
        },
        Showcase {
            title: "CLI mode & Commands",
            description: "Use cat2gether entirely from the command line with TUI and commands you're used to. Perfect for terminal lovers.",
            highlights: vec![
                ("fas fa-terminal", "Custom and default linux commands"),
                ("fas fa-cat", "cat2 command for controlling all of the custom features."),
                ("fab fa-osi", "Fully open-source CLI tool"),
            ],
            snippet_title: "commands.go",
            snippet: vec![
                Comment("// Full control with simple CLI tool"),
                Command("cat2 --status set online"),
                Output("Your status has been set to online"),
                Command("ls -a"),
                Output("List of all of your friends:"),
                Output("* pink-catprincess25 == Online"),
                Output("* blue-catking75 == Offline"),
                Output("* green-catqueen12 == Offline"),
            ],
        },
        Showcase {
            title: "Achievements & Badges",
            description: "Earn badges, achievements, and unlock easter eggs as you use cat2gether.",
            highlights: vec![
                ("fas fa-star", "Earn badges for your activity"),
                ("fas fa-trophy", "Collect achievements for your progress"),
                ("fas fa-egg", "Unlock easter eggs hidden on cat2gether"),
            ],
            snippet_title: "creative.ts",
            snippet: vec![
                Comment("// Achievements & Badges unlocking"),
                Command("cat2 --achievements list"),
                Output("Your unlocked achievements:"),
                Output("1. First Message - Sent your first message"),
                Output("2. Social Butterfly - Added 10 friends"),
                Command("cat2 --badges list"),
                Output("Your unlocked badges:"),
                Output("1. Early Bird - Logged in before 8 AM"),
                Output("2. Night Owl - Logged in after 10 PM"),
            ],
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let signup = use_signup_session(SignupSource::Main);
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let landing_css = r#"
        .landing-page {
            min-height: 100vh;
            position: relative;
        }
        .landing-page .site-header {
            position: sticky;
            top: 0;
            z-index: 50;
            display: flex;
            justify-content: center;
            align-items: center;
            gap: 0.5rem;
            padding: 1rem;
            border-bottom: 1px solid var(--border);
            background: rgba(24, 24, 27, 0.5);
            backdrop-filter: blur(6px);
        }
        .landing-hero {
            position: relative;
            z-index: 10;
            max-width: 56rem;
            margin: 0 auto;
            padding: 5rem 1rem 8rem;
            text-align: center;
        }
        .landing-hero h1 {
            font-size: clamp(3rem, 7vw, 4.5rem);
            font-weight: 700;
            margin-bottom: 1.5rem;
        }
        .landing-hero h1 .accent-line {
            display: block;
            color: var(--primary);
            font-family: var(--mono);
        }
        .landing-hero .lede {
            font-size: 1.25rem;
            color: var(--muted);
            max-width: 42rem;
            margin: 0 auto 3rem;
        }
    "#;

    html! {
        <div class="landing-page">
            <style>{landing_css}</style>
            <FloatingCats />
            <PawTrailOverlay />
            <header class="site-header">
                <i class="fas fa-cat brand-icon"></i>
                <span class="brand">{"cat2gether"}</span>
            </header>

            <section class="landing-hero">
                <h1>
                    {"Best dating app for"}
                    <span class="accent-line terminal-cursor">{"Geeks & Nerds"}</span>
                </h1>
                <p class="lede">
                    {"Connect through interests, not appearances. Privacy-first matching with"}
                    <span class="mono accent">{" encrypted chats"}</span>{","}
                    <span class="mono primary">{" nerdy functions "}</span>{"and"}
                    <span class="mono accent">{" cats!"}</span>
                </p>
                <SignupForm session={signup} />
            </section>

            <section class="section">
                <div class="section-heading">
                    <h2>{"Built Different"}</h2>
                    <p>{"We understand that geeks and nerds need more than swipe-right culture. Here's what makes cat2gether special."}</p>
                </div>
                <div class="feature-grid">
                    {
                        FEATURES.iter().map(|(icon, title, desc)| html! {
                            <div class="feature-card">
                                <i class={*icon}></i>
                                <h3>{*title}</h3>
                                <p class="muted">{*desc}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="privacy-band">
                <span class="pill"><i class="fas fa-lock"></i>{"Privacy by Design"}</span>
                <h2>{"Your Identity, Your Choice"}</h2>
                <p class="muted">
                    {"No photos, no real names until you both agree. Connect through shared interests, coding languages, fandoms, and personality - not appearance."}
                </p>
                <div class="privacy-points">
                    {
                        PRIVACY_POINTS.iter().map(|(icon, title, desc)| html! {
                            <div>
                                <i class={*icon}></i>
                                <h3 class="mono">{*title}</h3>
                                <p class="muted">{*desc}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Features That Get You"}</h2>
                <FeatureShowcase items={geek_features()} preview_chars={Some(DESCRIPTION_PREVIEW_CHARS)} />
            </section>

            <footer class="site-footer">
                <div class="footer-brand">
                    <i class="fas fa-cat brand-icon"></i>
                    <span class="brand">{"cat2gether"}</span>
                    <span class="badge">{"Beta"}</span>
                </div>
                <div class="footer-links">
                    <span class="mono">{"Built with 💜 for geeks"}</span>
                    <Link<Route> to={Route::Mobile} classes="mono">
                        <i class="fas fa-mobile-screen"></i>{" Mobile app"}
                    </Link<Route>>
                    <a href="https://github.com/cat2gether" target="_blank" rel="noopener noreferrer">
                        <i class="fab fa-github"></i>
                    </a>
                </div>
            </footer>
        </div>
    }
}
