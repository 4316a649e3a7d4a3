use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnippetLine {
    Comment(&'static str),
    Command(&'static str),
    Output(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Showcase {
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: Vec<(&'static str, &'static str)>,
    pub snippet_title: &'static str,
    pub snippet: Vec<SnippetLine>,
}

/// First `max_chars` characters of `text` followed by an ellipsis.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

#[derive(Properties, PartialEq, Clone)]
pub struct FeatureShowcaseProps {
    pub items: Vec<Showcase>,
    /// Shorten card descriptions to this many characters.
    #[prop_or_default]
    pub preview_chars: Option<usize>,
}

/// Selectable feature cards with a detail panel for the chosen one.
#[function_component(FeatureShowcase)]
pub fn feature_showcase(props: &FeatureShowcaseProps) -> Html {
    let selected = use_state(|| 0usize);
    let Some(current) = props.items.get(*selected).or_else(|| props.items.first()) else {
        return html! {};
    };

    html! {
        <div class="showcase">
            <div class="showcase-cards">
                {
                    props.items.iter().enumerate().map(|(index, item)| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(index))
                        };
                        let description = match props.preview_chars {
                            Some(max) => preview(item.description, max),
                            None => item.description.to_string(),
                        };
                        html! {
                            <button
                                key={index}
                                class={classes!("showcase-card", (index == *selected).then_some("active"))}
                                {onclick}
                            >
                                <span class="showcase-number">{index + 1}</span>
                                <div class="showcase-card-text">
                                    <h4>{item.title}</h4>
                                    <p>{description}</p>
                                </div>
                                <span class="showcase-arrow">{"→"}</span>
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="showcase-detail">
                <h3>{current.title}</h3>
                <p>{current.description}</p>
                <ul>
                    {
                        current.highlights.iter().map(|(icon, text)| html! {
                            <li><i class={*icon}></i><span>{*text}</span></li>
                        }).collect::<Html>()
                    }
                </ul>
                <div class="snippet">
                    <div class="snippet-bar">
                        <span class="dot red"></span>
                        <span class="dot yellow"></span>
                        <span class="dot green"></span>
                        <span class="snippet-title">{current.snippet_title}</span>
                    </div>
                    <pre>
                        {
                            current.snippet.iter().map(|line| {
                                let (class, text) = match line {
                                    SnippetLine::Comment(t) => ("comment", *t),
                                    SnippetLine::Command(t) => ("command", *t),
                                    SnippetLine::Output(t) => ("output", *t),
                                };
                                html! { <div class={class}>{text}</div> }
                            }).collect::<Html>()
                        }
                    </pre>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_cuts_on_chars() {
        assert_eq!(preview("Share code", 5), "Share...");
        assert_eq!(preview("short", 90), "short...");
        assert_eq!(preview("🐱🐱🐱 cats", 2), "🐱🐱...");
    }
}
