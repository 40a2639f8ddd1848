use sureddo_client::clean_submission;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ReplyFormProps {
    pub on_submit: Callback<String>,
    pub on_cancel: Callback<()>,
}

#[function_component(ReplyForm)]
pub fn reply_form(p: &ReplyFormProps) -> Html {
    let input_ref = use_node_ref();

    // grab focus when the form appears
    use_effect_with_deps(
        |input_ref| {
            input_ref
                .cast::<web_sys::HtmlTextAreaElement>()
                .expect("reply input is not a textarea element")
                .focus()
                .expect("failed focusing reply input");
            || ()
        },
        input_ref.clone(),
    );

    let on_submit = {
        let input_ref = input_ref.clone();
        let submit = p.on_submit.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            let input = input_ref
                .cast::<web_sys::HtmlTextAreaElement>()
                .expect("reply input is not a textarea element");
            // whitespace-only submissions do nothing and the form stays open
            if let Some(text) = clean_submission(&input.value()) {
                submit.emit(text);
            }
        })
    };

    html! {
        <form class="mt-3" onsubmit={ on_submit }>
            <div class="mb-2">
                <textarea
                    ref={ input_ref }
                    class="form-control"
                    rows="3"
                    placeholder="Write a reply..."
                ></textarea>
            </div>
            <div class="text-end">
                <button
                    type="button"
                    class="btn btn-light btn-sm"
                    onclick={ p.on_cancel.reform(|_| ()) }
                >
                    { "Cancel" }
                </button>
                { " " }
                <button type="submit" class="btn btn-secondary btn-sm">
                    { "Submit Reply" }
                </button>
            </div>
        </form>
    }
}
