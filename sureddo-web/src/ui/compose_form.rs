use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ComposeFormProps {
    pub value: String,
    pub on_edit: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Top-level comment box. The draft lives in App so a failed post keeps it
/// around for a manual retry.
#[function_component(ComposeForm)]
pub fn compose_form(p: &ComposeFormProps) -> Html {
    let on_submit = {
        let submit = p.on_submit.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };
    let on_edit = p.on_edit.reform(|e: web_sys::InputEvent| {
        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <form id="comment-form" class="mt-3" onsubmit={ on_submit }>
            <div class="mb-2">
                <textarea
                    class="form-control"
                    rows="3"
                    placeholder="Write a comment..."
                    value={ p.value.clone() }
                    oninput={ on_edit }
                ></textarea>
            </div>
            <div class="text-end">
                <button type="submit" class="btn btn-primary btn-sm">{ "Post Comment" }</button>
            </div>
        </form>
    }
}
