use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TagListProps {
    pub tags: Vec<String>,
}

#[function_component(TagList)]
pub fn tag_list(props: &TagListProps) -> Html {
    html! {
        <div class={classes!("post-tags", "flex", "flex-wrap", "gap-2")}>
            { for props.tags.iter().enumerate().map(|(index, tag)| html! {
                <span key={index} class={classes!("text-sm", "bg-gray-100", "px-3", "py-1", "rounded")}>
                    { tag.clone() }
                </span>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use yew::ServerRenderer;

    use super::*;

    async fn render(tags: Vec<String>) -> String {
        ServerRenderer::<TagList>::with_props(move || TagListProps {
            tags,
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn one_span_per_tag_in_order() {
        let html = render(vec!["rust".to_string(), "yew".to_string()]).await;
        assert!(html.contains("post-tags"), "{html}");
        assert_eq!(html.matches("<span").count(), 2, "{html}");
        let rust = html.find(">rust</span>").unwrap();
        let yew = html.find(">yew</span>").unwrap();
        assert!(rust < yew);
    }

    #[tokio::test]
    async fn empty_tags_render_an_empty_region() {
        let html = render(vec![]).await;
        assert!(html.contains("post-tags"), "{html}");
        assert_eq!(html.matches("<span").count(), 0, "{html}");
    }
}
