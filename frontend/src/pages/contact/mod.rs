//! Contact page: a message form relayed by `POST /api/contact`, followed by an
//! FAQ accordion.
//!
//! Only one request is in flight at a time; the submit button stays disabled
//! until the response arrives. The form is cleared after a successful send.

mod faq;

use common::requests::{ContactRequest, ContactResponse};
use gloo_net::http::Request;
use log::{error, info};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use faq::FAQ;

const SUBJECTS: [(&str, &str); 7] = [
    ("plant-care", "Plant Care Question"),
    ("general-inquiry", "General Inquiry"),
    ("sharing-story", "Sharing My Plant Story"),
    ("website-feedback", "Website Feedback"),
    ("technical-support", "Technical Support"),
    ("collaboration", "Collaboration"),
    ("other", "Other"),
];

#[derive(Clone, Copy)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, PartialEq)]
enum Status {
    Sent,
    Failed,
    Invalid(String),
}

pub enum Msg {
    SetField(Field, String),
    Submit,
    Finished(Result<(), String>),
    ToggleFaq(usize),
}

pub struct ContactPage {
    form: ContactRequest,
    submitting: bool,
    status: Option<Status>,
    open_faq: Option<usize>,
}

impl Component for ContactPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactRequest::default(),
            submitting: false,
            status: None,
            open_faq: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetField(field, value) => {
                let slot = match field {
                    Field::Name => &mut self.form.name,
                    Field::Email => &mut self.form.email,
                    Field::Subject => &mut self.form.subject,
                    Field::Message => &mut self.form.message,
                };
                *slot = value;
                if matches!(self.status, Some(Status::Invalid(_))) {
                    self.status = None;
                }
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                if let Err(e) = self.form.validate() {
                    self.status = Some(Status::Invalid(e.to_string()));
                    return true;
                }
                self.submitting = true;
                self.status = None;

                let request = self.form.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Finished(send(&request).await));
                });
                true
            }
            Msg::Finished(result) => {
                self.submitting = false;
                match result {
                    Ok(()) => {
                        info!("Contact message sent");
                        self.form = ContactRequest::default();
                        self.status = Some(Status::Sent);
                    }
                    Err(e) => {
                        error!("Form submission error: {}", e);
                        self.status = Some(Status::Failed);
                    }
                }
                true
            }
            Msg::ToggleFaq(index) => {
                self.open_faq = if self.open_faq == Some(index) {
                    None
                } else {
                    Some(index)
                };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let input = |field: Field| {
            link.callback(move |e: InputEvent| {
                Msg::SetField(field, e.target_unchecked_into::<HtmlInputElement>().value())
            })
        };
        let on_subject = link.callback(|e: Event| {
            Msg::SetField(Field::Subject, e.target_unchecked_into::<HtmlSelectElement>().value())
        });
        let on_message = link.callback(|e: InputEvent| {
            Msg::SetField(Field::Message, e.target_unchecked_into::<HtmlTextAreaElement>().value())
        });
        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <>
                <section class="page-intro">
                    <h1>{"Get in Touch"}</h1>
                    <p>{"Have questions about plant care or ZenFlora? We're here to help you on your mindful plant journey."}</p>
                </section>

                <section class="container section narrow">
                    <div class="card">
                        <h2>{"Send Us a Message"}</h2>
                        <p class="lead">{"We'd love to hear about your plant journey or help answer any questions."}</p>
                        { self.status_banner() }
                        <form class="form" onsubmit={on_submit} novalidate={true}>
                            <div class="form-row">
                                <label>
                                    {"Your Name *"}
                                    <input type="text" name="name" placeholder="Enter your name"
                                        value={self.form.name.clone()} oninput={input(Field::Name)} />
                                </label>
                                <label>
                                    {"Email Address *"}
                                    <input type="email" name="email" placeholder="Enter your email"
                                        value={self.form.email.clone()} oninput={input(Field::Email)} />
                                </label>
                            </div>
                            <label>
                                {"Subject *"}
                                <select name="subject" onchange={on_subject}>
                                    <option value="" selected={self.form.subject.is_empty()}>{"Select a subject"}</option>
                                    { for SUBJECTS.iter().map(|(value, label)| html! {
                                        <option value={*value} selected={self.form.subject == *value}>{ *label }</option>
                                    }) }
                                </select>
                            </label>
                            <label>
                                {"Message *"}
                                <textarea name="message" rows="6"
                                    placeholder="Tell us about your plants, questions, or just say hello..."
                                    value={self.form.message.clone()} oninput={on_message} />
                            </label>
                            <button type="submit" class="btn btn-primary" disabled={self.submitting}>
                                { if self.submitting { "Sending..." } else { "Send Message" } }
                            </button>
                        </form>
                    </div>
                </section>

                <section class="container section narrow">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <p class="lead">{"Find quick answers to common questions about ZenFlora and plant care."}</p>
                    <div class="faq">
                        { for FAQ.iter().enumerate().map(|(index, (question, answer))| {
                            let open = self.open_faq == Some(index);
                            html! {
                                <div class={classes!("faq-item", open.then_some("open"))}>
                                    <button class="faq-question" onclick={link.callback(move |_| Msg::ToggleFaq(index))}>
                                        <span>{ *question }</span>
                                        <span>{ if open { "−" } else { "+" } }</span>
                                    </button>
                                    if open {
                                        <p class="faq-answer">{ *answer }</p>
                                    }
                                </div>
                            }
                        }) }
                    </div>
                </section>

                <section class="container section narrow closing">
                    <h3>{"Our Commitment to You"}</h3>
                    <p>
                        {"Just like caring for plants requires patience and attention, we believe in thoughtful, mindful responses. \
                          Every message is important to us, and we'll get back to you within 24 hours."}
                    </p>
                    <p class="quote">{"\"In every question, there's an opportunity to grow together.\""}</p>
                </section>
            </>
        }
    }
}

impl ContactPage {
    fn status_banner(&self) -> Html {
        match &self.status {
            Some(Status::Sent) => html! {
                <div class="alert success">
                    {"Thank you for your message! We'll get back to you within 24 hours."}
                </div>
            },
            Some(Status::Failed) => html! {
                <div class="alert error">
                    {"Sorry, there was an error sending your message. Please try again or email us directly."}
                </div>
            },
            Some(Status::Invalid(message)) => html! {
                <div class="alert error">{ message }</div>
            },
            None => html! {},
        }
    }
}

/// Posts the form and returns the server's message on failure.
async fn send(request: &ContactRequest) -> Result<(), String> {
    let response = Request::post("/api/contact")
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    match response.json::<ContactResponse>().await {
        Ok(body) => Err(format!("{} {}", status, body.message)),
        Err(_) => Err(format!("HTTP {}", status)),
    }
}
