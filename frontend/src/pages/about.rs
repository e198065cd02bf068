use yew::prelude::*;

const VISION_IMAGE: &str =
    "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=800&h=600&auto=format&fit=crop";

const VALUES: [(&str, &str); 3] = [
    (
        "Simplicity",
        "Plant care doesn't need to be complicated. We focus on simple, gentle guidance that helps you succeed without overwhelming complexity.",
    ),
    (
        "Mindfulness",
        "Every plant offers an opportunity for mindful presence. We weave gentle contemplative practices into the plant care journey.",
    ),
    (
        "Accessibility",
        "Everyone deserves to experience the joy of plants. We focus on beginner-friendly varieties and clear, supportive guidance.",
    ),
];

const ACKNOWLEDGMENTS: [(&str, &str, &str); 2] = [
    (
        "Plant Information",
        "Plant care information curated from reputable horticultural sources and personal experience.",
        "Always consult with local gardening experts for specific growing conditions in your area.",
    ),
    (
        "Inspiration",
        "Inspired by the intersection of technology and nature, and the growing movement toward mindful living.",
        "Special thanks to the plant parent community for sharing their wisdom and experiences.",
    ),
];

pub struct AboutPage;

impl Component for AboutPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <section class="page-intro">
                    <h1>{"About ZenFlora"}</h1>
                    <p>
                        {"Where the ancient wisdom of plants meets modern mindfulness, \
                          creating spaces of serenity in our busy digital world."}
                    </p>
                </section>

                <section class="container section split">
                    <img class="rounded" src={VISION_IMAGE} alt="Peaceful plant arrangement" />
                    <div>
                        <h2>{"Our Vision"}</h2>
                        <p>
                            {"In our increasingly fast-paced world, we believe that connecting with nature, even \
                              in small ways, can be profoundly transformative. ZenFlora was born from the simple \
                              idea that houseplants offer us more than just beauty; they provide opportunities \
                              for mindfulness, presence, and gentle daily rituals."}
                        </p>
                        <p>
                            {"Each plant in our collection has been thoughtfully chosen not just for its \
                              aesthetic appeal or ease of care, but for its ability to invite moments of \
                              calm reflection into your daily routine."}
                        </p>
                    </div>
                </section>

                <section class="container section">
                    <h2>{"What We Believe"}</h2>
                    <p class="lead">{"Our core values shape every aspect of the ZenFlora experience."}</p>
                    <div class="pillars">
                        { for VALUES.iter().map(|(title, desc)| html! {
                            <div class="pillar">
                                <h3>{ *title }</h3>
                                <p>{ *desc }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="container section">
                    <h2>{"Acknowledgments"}</h2>
                    <div class="pillars two">
                        { for ACKNOWLEDGMENTS.iter().map(|(title, desc, note)| html! {
                            <div class="pillar">
                                <h3>{ *title }</h3>
                                <p>{ *desc }</p>
                                <p class="note">{ *note }</p>
                            </div>
                        }) }
                    </div>
                    <div class="closing">
                        <h3>{"Thank you for visiting ZenFlora"}</h3>
                        <p>{"May your journey with plants bring you moments of peace and joy."}</p>
                    </div>
                </section>
            </>
        }
    }
}
